mod chat_service;

pub use chat_service::{ChatError, ChatExchange, ChatService};
