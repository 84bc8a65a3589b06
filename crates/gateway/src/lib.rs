mod config;
mod cors;
mod error;
mod graphql;
mod handler;
mod openapi;
mod service;
mod types;

pub use config::{DEFAULT_MODEL, GatewayConfig};
pub use error::GatewayError;
pub use graphql::{GatewaySchema, GenerateInput, Mutation, Query, build_schema};
pub use handler::router;
pub use openapi::openapi;
pub use service::ChatService;
pub use types::{ChatReply, ChatRequest, STATUS_AVAILABLE, STATUS_MISSING_KEY, ServiceStatus};
