use utoipa::OpenApi;

use crate::types::{ChatReply, ChatRequest, ServiceStatus};

#[utoipa::path(
    get,
    path = "/health",
    operation_id = "health",
    responses(
        (status = 200, description = "Availability notice and active model", body = ServiceStatus),
    ),
    tag = "gateway",
)]
async fn _health_spec() {}

#[utoipa::path(
    post,
    path = "/openai",
    operation_id = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Normalized chat completion", body = ChatReply),
        (status = 400, description = "Missing or invalid `message`"),
        (status = 500, description = "Missing credential or upstream failure"),
    ),
    tag = "gateway",
)]
async fn _chat_spec() {}

#[derive(OpenApi)]
#[openapi(
    paths(_health_spec, _chat_spec),
    components(schemas(ChatRequest, ChatReply, ServiceStatus)),
    tags((name = "gateway", description = "OpenAI chat facade"))
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
