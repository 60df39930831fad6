use serde::{Deserialize, Serialize};

use super::MessageRole;

/// One role-tagged turn as exchanged with the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: MessageRole,
    pub content: String,
}

impl TranscriptTurn {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Ordered sequence of turns sent with every chat request. The client keeps
/// the running transcript; the server never reads it back from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<TranscriptTurn>);

impl Transcript {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&TranscriptTurn> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&TranscriptTurn> {
        self.0.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut TranscriptTurn> {
        self.0.last_mut()
    }

    pub fn turns(&self) -> &[TranscriptTurn] {
        &self.0
    }

    pub fn push(&mut self, turn: TranscriptTurn) {
        self.0.push(turn);
    }
}
