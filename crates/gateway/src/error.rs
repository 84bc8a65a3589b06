use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("OPENAI_API_KEY is not configured.")]
    Configuration,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Upstream(#[from] chatgate_openai::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            Self::Configuration => {
                tracing::error!("api_key_not_configured");
            }
            Self::Validation(reason) => {
                tracing::warn!(reason = %reason, "request_validation_failed");
            }
            Self::Upstream(e) => {
                tracing::error!(error = %e, "upstream_request_failed");
            }
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases: &[(GatewayError, StatusCode)] = &[
            (GatewayError::Configuration, StatusCode::INTERNAL_SERVER_ERROR),
            (
                GatewayError::Validation("`message` is required.".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                GatewayError::Upstream(chatgate_openai::Error::Status {
                    status: 429,
                    body: "rate limited".into(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), *expected, "{error}");
        }
    }

    #[test]
    fn upstream_error_keeps_status_and_body() {
        let error = GatewayError::Upstream(chatgate_openai::Error::Status {
            status: 429,
            body: "rate limited".into(),
        });

        let rendered = error.to_string();
        assert!(rendered.contains("429"));
        assert!(rendered.contains("rate limited"));
    }
}
