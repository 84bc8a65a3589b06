mod types;

pub use types::{ChatChoice, ChatCompletion, ChatCompletionRequest, ChatMessage, CompletionMessage, Role};

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("OpenAI request failed: {status} {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Thin client for the chat-completions endpoint. Holds the connection pool
/// and base URL; the bearer token is passed per call.
#[derive(Debug, Clone)]
pub struct Client {
    api_base: String,
    client: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }
}

impl Client {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            client,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Single attempt, no retry. A non-success status reads the body as text
    /// and surfaces it verbatim alongside the status code.
    pub async fn chat_completions(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, Error> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
