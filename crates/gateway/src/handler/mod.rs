use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{any, post};
use axum::{Json, Router, middleware};

use crate::config::GatewayConfig;
use crate::cors::cors_middleware;
use crate::error::GatewayError;
use crate::graphql::{GatewaySchema, build_schema, graphiql_source};
use crate::service::{ChatService, validate_message};
use crate::types::{ChatReply, ServiceStatus};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: ChatService,
    pub(crate) schema: GatewaySchema,
}

/// Full HTTP surface: REST chat on `/openai` (and `/`, kept for clients of
/// the root-mounted deployment), GraphQL on `/graphql`, health probe, and
/// the CORS/preflight layer wrapping everything including the fallbacks.
pub fn router(config: GatewayConfig) -> Router {
    let service = ChatService::new(config);
    let schema = build_schema(service.clone());
    let state = AppState { service, schema };

    Router::new()
        .route("/", post(chat_handler).fallback(method_not_allowed))
        .route("/openai", post(chat_handler).fallback(method_not_allowed))
        .route("/health", any(health_handler))
        .route(
            "/graphql",
            post(graphql_handler)
                .get(graphiql_handler)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

async fn health_handler(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(state.service.status())
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ChatReply>, GatewayError> {
    let Json(payload) =
        payload.map_err(|_| GatewayError::Validation("Invalid JSON body".to_string()))?;

    let message = validate_message(payload.get("message").and_then(|v| v.as_str()))?;

    let reply = state.service.complete(message).await?;
    Ok(Json(reply))
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql_handler() -> Html<String> {
    Html(graphiql_source("/graphql"))
}

async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
