use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{
    CompletionClient, CompletionError, ConversationRepository, RepositoryError, TokenStream,
};
use crate::domain::{Conversation, ConversationId, Message, MessageRole, Transcript};

/// Orchestrates one chat turn: resolves the conversation record, persists the
/// inbound user message, and opens the completion stream. The caller drains
/// the stream and records the assistant reply once it ends.
pub struct ChatService<C>
where
    C: CompletionClient,
{
    completion_client: Arc<C>,
    conversation_repository: Arc<dyn ConversationRepository>,
    model: String,
}

pub struct ChatExchange {
    pub conversation_id: ConversationId,
    pub token_stream: TokenStream,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("transcript is empty")]
    EmptyTranscript,
    #[error("failed to create conversation: {0}")]
    ConversationCreation(RepositoryError),
    #[error("completion request failed: {0}")]
    Completion(#[from] CompletionError),
}

impl<C> ChatService<C>
where
    C: CompletionClient,
{
    pub fn new(
        completion_client: Arc<C>,
        conversation_repository: Arc<dyn ConversationRepository>,
        model: String,
    ) -> Self {
        Self {
            completion_client,
            conversation_repository,
            model,
        }
    }

    /// Runs the pre-stream half of a chat turn. Conversation creation is the
    /// only failure surfaced to the caller; a failed user-message insert is
    /// logged and the exchange continues so the stream is never blocked on
    /// storage.
    #[instrument(skip(self, transcript), fields(turns = transcript.len()))]
    pub async fn begin_exchange(
        &self,
        transcript: &Transcript,
        conversation_id: Option<ConversationId>,
    ) -> Result<ChatExchange, ChatError> {
        let first = transcript.first().ok_or(ChatError::EmptyTranscript)?;

        let conversation_id = match conversation_id {
            Some(id) => id,
            None => {
                let conversation = Conversation::titled_from(&first.content);
                self.conversation_repository
                    .create_conversation(&conversation)
                    .await
                    .map_err(ChatError::ConversationCreation)?;
                tracing::debug!(conversation_id = %conversation.id, "Created conversation");
                conversation.id
            }
        };

        if let Some(last) = transcript.last() {
            if last.role == MessageRole::User {
                let user_message = Message::user(conversation_id, last.content.clone());
                if let Err(e) = self
                    .conversation_repository
                    .append_message(&user_message)
                    .await
                {
                    tracing::warn!(
                        error = %e,
                        conversation_id = %conversation_id,
                        "Failed to persist user message, continuing"
                    );
                }
            }
        }

        let token_stream = self.completion_client.stream_completion(transcript).await?;

        Ok(ChatExchange {
            conversation_id,
            token_stream,
            model: self.model.clone(),
        })
    }
}
