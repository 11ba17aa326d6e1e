use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careerprep::config::Config;
use careerprep::knowledge::KnowledgeBase;
use careerprep::routes::build_router;
use careerprep::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPrep API v{}", env!("CARGO_PKG_VERSION"));

    // Load knowledge base (built-in tables unless overridden)
    let knowledge = match &config.knowledge_base_path {
        Some(path) => {
            let kb = KnowledgeBase::from_path(path)?;
            info!("Knowledge base loaded from {}", path.display());
            kb
        }
        None => KnowledgeBase::default(),
    };
    if let Some(seed) = config.question_seed {
        info!("Question shuffling seeded with {seed}");
    }

    let state = AppState::new(config.clone(), knowledge);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
