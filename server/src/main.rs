//! Elza gateway binary.
//!
//! Loads `.env` overrides, parses configuration, initializes tracing,
//! and serves the HTTP API. Configuration problems are diagnostics,
//! not fatal: a gateway without a provider key still starts and
//! answers every prompt with the fallback reply.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elza_api::{ApiConfig, AppStateProvider};
use elza_server::{AppState, CliArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads the environment.
    let dotenv_path = dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &dotenv_path {
        Some(path) => info!(path = %path.display(), "Loaded environment overrides from .env"),
        None => warn!("No .env file found, relying on the process environment"),
    }

    info!("Starting Elza gateway v{}", env!("CARGO_PKG_VERSION"));

    let key_loaded = !args.openai_api_key.trim().is_empty();
    info!(
        model = %args.openai_model.trim(),
        key_loaded,
        timeout_secs = args.timeout,
        "Provider configuration"
    );
    if !key_loaded {
        warn!("OPENAI_API_KEY is empty; provider calls will fail and clients will get the fallback reply");
    }
    if args.server_token.trim().is_empty() {
        warn!("SERVER_TOKEN is empty; POST /elza/reply accepts unauthenticated requests");
    }

    let state = Arc::new(AppState::new(&args)) as Arc<dyn AppStateProvider>;

    let config = ApiConfig {
        port: args.port,
        ..Default::default()
    };

    elza_api::run_server_with_config(state, config).await
}
