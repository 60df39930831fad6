mod chat;
mod conversations;
mod health;

pub use chat::{CONVERSATION_ID_HEADER, ChatRequest, ChatRequestData, ErrorResponse, chat_handler};
pub use conversations::{ConversationSummary, conversations_handler};
pub use health::health_handler;
