mod config;
mod errors;
mod llm_client;
mod profile;
mod relay;
mod routes;
mod site;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profile::Profile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Static profile record; immutable from here on
    let profile = Arc::new(Profile::load(config.profile_path.as_deref())?);

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_base_url,
        config.llm_timeout_secs.map(Duration::from_secs),
    )?;
    if config.has_api_key() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GEMINI_API_KEY is not set; relay widgets will answer with fallback text");
    }

    let state = AppState {
        profile,
        generator: Arc::new(llm),
        config: config.clone(),
    };

    // The page's widgets call the API from the same origin; CORS allows other frontends.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
