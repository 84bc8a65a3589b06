use chatgate_openai::{ChatCompletionRequest, ChatMessage};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::types::{ChatReply, STATUS_AVAILABLE, STATUS_MISSING_KEY, ServiceStatus};

const SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";
const TEMPERATURE: f32 = 0.7;

/// Core service shared by the REST and GraphQL transports. Holds the
/// immutable config and the upstream client; no other state.
#[derive(Clone)]
pub struct ChatService {
    config: GatewayConfig,
    client: chatgate_openai::Client,
}

impl ChatService {
    pub fn new(config: GatewayConfig) -> Self {
        let mut client = chatgate_openai::Client::new(config.timeout);
        if let Some(api_base) = &config.api_base {
            client = client.with_api_base(api_base.clone());
        }

        Self { config, client }
    }

    pub fn status(&self) -> ServiceStatus {
        let message = if self.config.has_api_key() {
            STATUS_AVAILABLE
        } else {
            STATUS_MISSING_KEY
        };

        ServiceStatus {
            message: message.to_string(),
            model: self.config.model.clone(),
        }
    }

    pub async fn complete(&self, message: &str) -> Result<ChatReply, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GatewayError::Configuration)?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(message),
            ],
            temperature: TEMPERATURE,
        };

        tracing::info!(
            model = %request.model,
            message_len = %message.len(),
            "chat_completion_request_received"
        );

        let completion = self.client.chat_completions(api_key, &request).await?;

        let choice = completion.choices.into_iter().next();
        let (content, finish_reason) = match choice {
            Some(choice) => (
                choice
                    .message
                    .and_then(|m| m.content)
                    .unwrap_or_default(),
                choice.finish_reason,
            ),
            None => (String::new(), None),
        };

        Ok(ChatReply {
            content,
            model: completion.model.unwrap_or_else(|| self.config.model.clone()),
            finish_reason,
        })
    }
}

/// The only input validation in the system: `message` must be a string that
/// is non-empty after trimming. The original, untrimmed text is forwarded.
pub fn validate_message(message: Option<&str>) -> Result<&str, GatewayError> {
    match message {
        Some(m) if !m.trim().is_empty() => Ok(m),
        _ => Err(GatewayError::Validation("`message` is required.".to_string())),
    }
}
