//! Elza API Crate
//!
//! Self-contained HTTP API layer using Axum for the Elza reply
//! gateway.
//!
//! # Architecture
//!
//! This crate provides the complete gateway surface:
//! - A liveness probe (`GET /`), a health report (`GET /health`), and
//!   the reply endpoint (`POST /elza/reply`)
//! - Optional shared-secret bearer authorization enforced at route
//!   registration
//! - OpenAPI/Swagger documentation
//! - CORS and request tracing middleware
//!
//! Business state (configuration and the completion provider) is
//! injected through [`AppStateProvider`], so the binary crate wires a
//! real client while tests substitute a stub.
//!
//! # Usage
//!
//! ```rust,no_run
//! use elza_api::{ApiConfig, AppStateProvider};
//! use std::sync::Arc;
//!
//! struct MyState;
//!
//! #[async_trait::async_trait]
//! impl AppStateProvider for MyState {
//!     fn model(&self) -> &str {
//!         "gpt-4o-mini"
//!     }
//!
//!     fn key_loaded(&self) -> bool {
//!         false
//!     }
//!
//!     fn server_token(&self) -> &str {
//!         ""
//!     }
//!
//!     async fn complete(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
//!         Ok("Sveiki!".to_string())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let state = Arc::new(MyState) as Arc<dyn AppStateProvider>;
//!     elza_api::run_server_with_config(state, ApiConfig::default()).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod middleware;
mod router;
mod routes;
mod traits;
pub mod route_trait;

// Re-export public API
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use router::configure_routes;
pub use routes::reply::{FALLBACK_PREFIX, SYSTEM_PROMPT};
pub use traits::AppStateProvider;

use std::{net::SocketAddr, sync::Arc};

/// Run the HTTP API server on the given port with default settings.
///
/// # Errors
///
/// Returns an error if the port is already in use or the server
/// encounters a fatal error.
pub async fn run_server<S>(state: S, port: u16) -> anyhow::Result<()>
where
    S: AppStateProvider + 'static,
{
    run_server_with_config(
        Arc::new(state) as Arc<dyn AppStateProvider>,
        ApiConfig {
            port,
            ..Default::default()
        },
    )
    .await
}

/// Run the HTTP API server with custom configuration.
///
/// Binds all interfaces so the gateway is reachable from the LAN, not
/// just localhost.
///
/// # Errors
///
/// Returns an error if the server fails to bind or to serve.
pub async fn run_server_with_config(
    state: Arc<dyn AppStateProvider>,
    config: ApiConfig,
) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Elza gateway listening on http://{}", addr);
    if config.enable_swagger {
        tracing::info!("Swagger UI:   http://{}/swagger-ui/", addr);
        tracing::info!("OpenAPI spec: http://{}/api-doc/openapi.json", addr);
    }

    let app = router::configure_routes(state, &config);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
