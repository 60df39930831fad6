use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lunachat::application::ports::ConversationRepository;
use lunachat::application::services::ChatService;
use lunachat::infrastructure::llm::StreamingCompletionClient;
use lunachat::infrastructure::observability::{TracingConfig, init_tracing};
use lunachat::infrastructure::persistence::{PgConversationRepository, create_pool};
use lunachat::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    sqlx::migrate!().run(&pool).await?;

    let conversation_repository: Arc<dyn ConversationRepository> =
        Arc::new(PgConversationRepository::new(pool));
    let completion_client = Arc::new(StreamingCompletionClient::new(&settings.llm));

    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&completion_client),
        Arc::clone(&conversation_repository),
        settings.llm.model.clone(),
    ));

    let state = AppState {
        chat_service,
        conversation_repository,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
