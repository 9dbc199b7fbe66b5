pub mod handlers;
mod types;

use crate::{
    Result,
    chat::{ChatService, prompts},
    config::Config,
    llm::{LlmClient, OpenAiClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::AppState;
pub use types::HealthResponse;

/// Builds the HTTP router around a model client.
pub fn router(client: Arc<dyn LlmClient>) -> Router {
    let app_state = AppState::new(ChatService::new(client));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .route("/summarize", post(handlers::summarize))
        .route("/scenario", post(handlers::scenario))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let system_prompt = config
        .llm
        .system_prompt
        .clone()
        .unwrap_or_else(|| prompts::default_system_prompt(&config.assistant));

    let client = OpenAiClient::new(config.llm.clone()).with_system_prompt(system_prompt);
    info!("Using model {} at {}", client.model(), config.llm.base_url);

    let app = router(Arc::new(client));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
