mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod writing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::writing::fallback::FallbackBank;
use crate::writing::Writer;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HeartNote API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.generation_timeout)?
        .with_base_url(&config.gemini_base_url);
    if llm.has_api_key() {
        info!(
            "LLM client initialized (model: {}, timeout: {:?})",
            llm_client::MODEL,
            config.generation_timeout
        );
    } else {
        warn!("GEMINI_API_KEY is not set; every request will be served from fallback content");
    }

    if let Some(seed) = config.fallback_seed {
        info!("Fallback selection seeded with {seed}");
    }

    let writer = Writer::new(Arc::new(llm)).with_fallback(FallbackBank::new(config.fallback_seed));

    let state = AppState {
        writer: Arc::new(writer),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // PWA front end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
