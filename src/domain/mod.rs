mod conversation;
mod conversation_id;
mod message;
mod message_id;
mod message_role;
mod transcript;

pub use conversation::Conversation;
pub use conversation_id::ConversationId;
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
pub use transcript::{Transcript, TranscriptTurn};
