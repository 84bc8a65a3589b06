use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_AVAILABLE: &str = "服务可用";
pub const STATUS_MISSING_KEY: &str = "缺少 OPENAI_API_KEY";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Stable output shape, decoupled from the upstream schema. Missing upstream
/// fields default instead of erroring: empty content, null finish reason,
/// the configured model.
#[derive(Debug, Clone, Serialize, SimpleObject, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub content: String,
    pub model: String,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, SimpleObject, ToSchema)]
pub struct ServiceStatus {
    pub message: String,
    pub model: String,
}
