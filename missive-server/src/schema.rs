//! Contratto GraphQL: tipi `Message`/`MessageInput` e le radici Query e Mutation.
//! I resolver delegano tutto a [`MessageStore`], iniettato come dato dello schema.

use async_graphql::{Context, EmptySubscription, ErrorExtensions, InputObject, Object, Schema, SimpleObject, ID};
use missive_core::{Message, MessageInput, MessageStore};
use std::sync::Arc;

pub type MessageSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Costruisce lo schema una volta all'avvio, con lo store condiviso.
pub fn build_schema(store: Arc<MessageStore>) -> MessageSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Message")]
pub struct MessageObject {
    /// Unique ID of the message.
    pub id: ID,
    /// Content of the message.
    pub content: Option<String>,
    /// Author of the message.
    pub author: Option<String>,
}

impl From<Message> for MessageObject {
    fn from(m: Message) -> Self {
        Self { id: ID(m.id), content: m.content, author: m.author }
    }
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "MessageInput")]
pub struct MessageInputObject {
    /// Content of the message.
    pub content: Option<String>,
    /// Author of the message.
    pub author: Option<String>,
}

impl From<MessageInputObject> for MessageInput {
    fn from(input: MessageInputObject) -> Self {
        Self { content: input.content, author: input.author }
    }
}

// errore di dominio -> errore GraphQL sul campo, con il codice in extensions
fn field_error(err: missive_core::Error) -> async_graphql::Error {
    tracing::warn!(code = err.code(), "{}", err);
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<MessageStore>> {
    ctx.data::<Arc<MessageStore>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a message by ID from database.
    async fn get_message(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<MessageObject>> {
        tracing::debug!(message_id = %id.as_str(), "getMessage");
        let message = store(ctx)?.get(&id).map_err(field_error)?;
        Ok(Some(message.into()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create new message and save to database.
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInputObject>,
    ) -> async_graphql::Result<Option<MessageObject>> {
        // input null = input con entrambi i campi assenti
        let message = store(ctx)?.create(input.unwrap_or_default().into());
        tracing::info!(message_id = %message.id, "message created");
        Ok(Some(message.into()))
    }

    /// Update existing message by ID.
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInputObject>,
    ) -> async_graphql::Result<Option<MessageObject>> {
        let message = store(ctx)?
            .update(&id, input.unwrap_or_default().into())
            .map_err(field_error)?;
        tracing::info!(message_id = %message.id, "message updated");
        Ok(Some(message.into()))
    }
}
