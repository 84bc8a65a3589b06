use std::net::SocketAddr;

use chatgate_gateway::{GatewayConfig, router};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8787;

fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

#[derive(Deserialize)]
struct Env {
    #[serde(default, deserialize_with = "filter_empty")]
    openai_api_key: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    openai_model: Option<String>,
    #[serde(default)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let env = envy::from_env::<Env>()?;

    // Startup proceeds without the key so /health can report its absence.
    if env.openai_api_key.is_none() {
        tracing::warn!("openai_api_key_not_set");
    }

    let mut config = match env.openai_api_key {
        Some(api_key) => GatewayConfig::new(api_key),
        None => GatewayConfig::default(),
    };
    if let Some(model) = env.openai_model {
        config = config.with_model(model);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], env.port.unwrap_or(DEFAULT_PORT)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(config)).await?;
    Ok(())
}
