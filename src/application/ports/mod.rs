mod completion_client;
mod conversation_repository;
mod repository_error;

pub use completion_client::{CompletionClient, CompletionError, TokenStream};
pub use conversation_repository::ConversationRepository;
pub use repository_error::RepositoryError;
