use async_trait::async_trait;

use crate::domain::{Conversation, Message};

use super::RepositoryError;

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create_conversation(&self, conversation: &Conversation)
    -> Result<(), RepositoryError>;

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError>;

    /// Most recently updated conversations, descending by `updated_at`.
    async fn list_recent_conversations(
        &self,
        limit: usize,
    ) -> Result<Vec<Conversation>, RepositoryError>;
}
