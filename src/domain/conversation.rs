use chrono::{DateTime, Utc};

use super::ConversationId;

/// Number of characters of the opening message used as the conversation title.
pub const TITLE_MAX_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(title: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ConversationId::new(),
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a conversation titled with the opening message, truncated on a
    /// character boundary.
    pub fn titled_from(opening_content: &str) -> Self {
        let title: String = opening_content.chars().take(TITLE_MAX_CHARS).collect();
        Self::new(Some(title))
    }
}
