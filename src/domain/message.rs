use chrono::{DateTime, Utc};

use super::{ConversationId, MessageId, MessageRole};

#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    /// Model identifier, set on assistant turns only.
    pub model: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(conversation_id: ConversationId, content: String) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role: MessageRole::User,
            content,
            model: None,
            created_at: Utc::now(),
        }
    }

    pub fn assistant(conversation_id: ConversationId, content: String, model: String) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role: MessageRole::Assistant,
            content,
            model: Some(model),
            created_at: Utc::now(),
        }
    }
}
