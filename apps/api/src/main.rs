use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use ats_api::analysis::resources;
use ats_api::config::Config;
use ats_api::documents::DefaultTextExtractor;
use ats_api::routes::build_router;
use ats_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Prepare stopwords + tokenizer once; degrades instead of failing
    let resources = resources::ensure_ready(config.stopwords_path.as_deref());
    info!("Text resources mode: {:?}", resources.mode());

    info!(
        "Analysis defaults: keywords min_frequency={} top_n={}, matching min_freq={} top_n={}",
        config.analysis.keywords.min_frequency,
        config.analysis.keywords.top_n,
        config.analysis.matching.min_freq,
        config.analysis.matching.top_n
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        resources,
        extractor: Arc::new(DefaultTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
