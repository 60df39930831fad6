use std::sync::Arc;

use crate::application::ports::{CompletionClient, ConversationRepository};
use crate::application::services::ChatService;

pub struct AppState<C>
where
    C: CompletionClient,
{
    pub chat_service: Arc<ChatService<C>>,
    pub conversation_repository: Arc<dyn ConversationRepository>,
}

impl<C> Clone for AppState<C>
where
    C: CompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            conversation_repository: Arc::clone(&self.conversation_repository),
        }
    }
}
