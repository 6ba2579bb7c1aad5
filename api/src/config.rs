//! API configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP API server.
///
/// # Example
///
/// ```rust
/// use elza_api::ApiConfig;
///
/// let config = ApiConfig {
///     port: 5000,
///     enable_cors: true,
///     cors_origins: vec!["*".to_string()],
///     enable_swagger: true,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Port to bind the HTTP server to.
    ///
    /// Default: 5000
    pub port: u16,

    /// Enable Cross-Origin Resource Sharing (CORS).
    ///
    /// Default: true
    pub enable_cors: bool,

    /// Allowed origins for CORS requests.
    ///
    /// Use `["*"]` to allow all origins (development only).
    ///
    /// Default: `["*"]`
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI documentation.
    ///
    /// When enabled, API docs are available at `/swagger-ui/`.
    ///
    /// Default: true
    pub enable_swagger: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            enable_swagger: true,
        }
    }
}

impl ApiConfig {
    /// Create a new configuration for production use.
    ///
    /// CORS is restricted to the given origins and Swagger UI is
    /// disabled.
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self {
            enable_swagger: false,
            cors_origins: allowed_origins,
            ..Default::default()
        }
    }

    /// Create a new configuration for local development.
    ///
    /// CORS allows all origins and Swagger UI is enabled.
    pub fn development() -> Self {
        Self {
            cors_origins: vec!["*".to_string()],
            enable_swagger: true,
            ..Default::default()
        }
    }
}
