use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures::stream::StreamExt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::CompletionClient;
use crate::application::services::{ChatError, ChatExchange};
use crate::domain::{ConversationId, Message, Transcript};
use crate::presentation::state::AppState;

/// Response header carrying the resolved conversation id, which the client
/// stores and sends back on subsequent turns.
pub const CONVERSATION_ID_HEADER: &str = "x-conversation-id";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Transcript,
    #[serde(default)]
    pub data: Option<ChatRequestData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestData {
    pub conversation_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[tracing::instrument(skip(state, request), fields(turns = request.messages.len()))]
pub async fn chat_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<ChatRequest>,
) -> Response
where
    C: CompletionClient + 'static,
{
    let supplied_id = request
        .data
        .unwrap_or_default()
        .conversation_id
        .map(ConversationId::from_uuid);

    let exchange = match state
        .chat_service
        .begin_exchange(&request.messages, supplied_id)
        .await
    {
        Ok(exchange) => exchange,
        Err(ChatError::EmptyTranscript) => {
            tracing::warn!("Chat request with empty transcript");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No messages provided")),
            )
                .into_response();
        }
        Err(ChatError::ConversationCreation(e)) => {
            tracing::error!(error = %e, "Failed to create conversation");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create conversation")),
            )
                .into_response();
        }
        Err(ChatError::Completion(e)) => {
            tracing::error!(error = %e, "Completion request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Completion request failed")),
            )
                .into_response();
        }
    };

    let ChatExchange {
        conversation_id,
        mut token_stream,
        model,
    } = exchange;
    let conversation_repo = Arc::clone(&state.conversation_repository);

    // Fragments pass straight through to the caller; the assembled reply is
    // persisted only once the stream has ended, and never interrupts it.
    let body_stream = async_stream::stream! {
        let mut assembled = String::new();

        while let Some(next) = token_stream.next().await {
            match next {
                Ok(fragment) => {
                    assembled.push_str(&fragment);
                    yield Ok::<_, Infallible>(Bytes::from(fragment));
                }
                Err(e) => {
                    tracing::error!(error = %e, conversation_id = %conversation_id, "Stream token error");
                    break;
                }
            }
        }

        let reply = Message::assistant(conversation_id, assembled, model);
        if let Err(e) = conversation_repo.append_message(&reply).await {
            tracing::error!(
                error = %e,
                conversation_id = %conversation_id,
                "Failed to persist assistant message"
            );
        }
    };

    let conversation_header = conversation_id.to_string();
    (
        [
            (header::CONTENT_TYPE.as_str(), "text/plain; charset=utf-8"),
            (CONVERSATION_ID_HEADER, conversation_header.as_str()),
        ],
        Body::from_stream(body_stream),
    )
        .into_response()
}
