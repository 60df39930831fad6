use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message};

/// Vec-backed repository for tests and local runs without a database.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversations(&self) -> Vec<Conversation> {
        self.state.lock().unwrap().conversations.clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn messages_for(&self, conversation_id: ConversationId) -> Vec<Message> {
        self.state
            .lock()
            .unwrap()
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create_conversation(
        &self,
        conversation: &Conversation,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.conversations.iter().any(|c| c.id == conversation.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate conversation id: {}",
                conversation.id
            )));
        }
        state.conversations.push(conversation.clone());
        Ok(())
    }

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.messages.push(message.clone());

        let now = Utc::now();
        if let Some(conversation) = state
            .conversations
            .iter_mut()
            .find(|c| c.id == message.conversation_id)
        {
            conversation.updated_at = now;
        }
        Ok(())
    }

    async fn list_recent_conversations(
        &self,
        limit: usize,
    ) -> Result<Vec<Conversation>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut conversations = state.conversations.clone();
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        conversations.truncate(limit);
        Ok(conversations)
    }
}
