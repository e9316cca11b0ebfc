//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use chattia_core::config::ChattiaConfig;
use chattia_responder::{Responder, RuleResponder};
use chattia_retrieval::RetrieverRegistry;

/// Shared state for the gateway server. Everything here is immutable after
/// startup, so handlers share it behind a plain `Arc`.
pub struct AppState {
    pub config: ChattiaConfig,
    /// One BM25 retriever per loaded language, with default-language fallback.
    pub registry: RetrieverRegistry,
    /// Reply composer — rule-based in the demo, swappable at this seam.
    pub responder: Box<dyn Responder>,
    /// Where synthesized clips and voice uploads live.
    pub audio_dir: PathBuf,
}

impl AppState {
    pub fn new(config: ChattiaConfig) -> Self {
        let registry = RetrieverRegistry::build(&config.retrieval);
        if registry.is_empty() {
            tracing::warn!("No corpora loaded — every chat reply will be a fallback");
        }
        let audio_dir = PathBuf::from(&config.gateway.audio_dir);
        Self {
            config,
            registry,
            responder: Box::new(RuleResponder::new()),
            audio_dir,
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(super::routes::chat))
        .route("/voice", post(super::routes::voice))
        .route("/audio/{filename}", get(super::routes::audio))
        .route("/health", get(super::routes::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load corpora, bind the listener, and serve until shutdown.
pub async fn start_server(config: ChattiaConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config));
    std::fs::create_dir_all(&state.audio_dir)?;

    let addr = format!("{}:{}", state.config.gateway.host, state.config.gateway.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 Gateway server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
