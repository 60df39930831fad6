mod streaming_client;

pub use streaming_client::StreamingCompletionClient;
