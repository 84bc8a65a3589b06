use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, InputObject, Object, Schema};

use crate::service::{ChatService, validate_message};
use crate::types::{ChatReply, ServiceStatus};

pub type GatewaySchema = Schema<Query, Mutation, EmptySubscription>;

/// The GraphQL transport is a thin adapter over [`ChatService`]; resolvers
/// carry no logic of their own.
pub fn build_schema(service: ChatService) -> GatewaySchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(service)
        .finish()
}

pub fn graphiql_source(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}

pub struct Query;

#[Object]
impl Query {
    async fn status(&self, ctx: &Context<'_>) -> ServiceStatus {
        ctx.data_unchecked::<ChatService>().status()
    }
}

#[derive(InputObject)]
pub struct GenerateInput {
    pub message: String,
}

pub struct Mutation;

#[Object]
impl Mutation {
    async fn generate_response(
        &self,
        ctx: &Context<'_>,
        input: GenerateInput,
    ) -> async_graphql::Result<ChatReply> {
        let message = validate_message(Some(&input.message))
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        ctx.data_unchecked::<ChatService>()
            .complete(message)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
