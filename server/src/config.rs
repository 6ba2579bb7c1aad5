//! Configuration system for the Elza gateway.
//!
//! Supports:
//! - CLI arguments (highest priority)
//! - Environment variables, including a `.env` file loaded at startup
//! - Defaults (lowest priority)
//!
//! The environment names are part of the external contract the mobile
//! app's deployment scripts rely on: `OPENAI_API_KEY`, `OPENAI_MODEL`,
//! `SERVER_TOKEN`, `TIMEOUT`.

use clap::Parser;

/// Command-line arguments for the Elza gateway.
#[derive(Parser, Debug, Clone)]
#[command(name = "elza-server")]
#[command(about = "Elza gateway: forwards prompts to a completion provider and relays replies")]
#[command(version)]
pub struct CliArgs {
    /// HTTP port for the gateway (listens on all interfaces)
    #[arg(long, short = 'p', default_value = "5000")]
    pub port: u16,

    /// Completion provider API key
    #[arg(long, default_value = "", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Completion model identifier
    #[arg(long, default_value = "gpt-4o-mini", env = "OPENAI_MODEL")]
    pub openai_model: String,

    /// Completion provider base URL
    #[arg(long, default_value = "https://api.openai.com/v1", env = "OPENAI_BASE_URL")]
    pub openai_base_url: String,

    /// Shared-secret bearer token; empty leaves the reply endpoint open
    #[arg(long, default_value = "", env = "SERVER_TOKEN", hide_env_values = true)]
    pub server_token: String,

    /// Provider request timeout in seconds
    #[arg(long, default_value = "15", env = "TIMEOUT")]
    pub timeout: u64,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

impl CliArgs {
    /// Arguments with every default in place, independent of the
    /// process environment. Used by tests.
    #[cfg(test)]
    pub(crate) fn defaults() -> Self {
        Self {
            port: 5000,
            openai_api_key: String::new(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            server_token: String::new(),
            timeout: 15,
            log_level: "info".to_string(),
        }
    }
}
