use std::pin::Pin;

use async_trait::async_trait;
use futures::stream::Stream;

use crate::domain::Transcript;

pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, CompletionError>> + Send>>;

/// Boundary around the hosted model endpoint: takes the running transcript,
/// yields text fragments as the model produces them.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn stream_completion(&self, transcript: &Transcript)
    -> Result<TokenStream, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
