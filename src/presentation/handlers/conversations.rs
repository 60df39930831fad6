use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::CompletionClient;
use crate::domain::Conversation;
use crate::presentation::state::AppState;

use super::chat::ErrorResponse;

/// How many conversations the sidebar shows.
const RECENT_CONVERSATIONS_LIMIT: usize = 20;

#[derive(Debug, Serialize)]
pub struct ConversationSummary {
    pub id: Uuid,
    pub title: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationSummary {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id.as_uuid(),
            title: conversation.title,
            updated_at: conversation.updated_at,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn conversations_handler<C>(State(state): State<AppState<C>>) -> impl IntoResponse
where
    C: CompletionClient + 'static,
{
    match state
        .conversation_repository
        .list_recent_conversations(RECENT_CONVERSATIONS_LIMIT)
        .await
    {
        Ok(conversations) => {
            let summaries: Vec<ConversationSummary> = conversations
                .into_iter()
                .map(ConversationSummary::from)
                .collect();
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list conversations");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to load conversations")),
            )
                .into_response()
        }
    }
}
