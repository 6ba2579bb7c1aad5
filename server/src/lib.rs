//! Elza Gateway Server
//!
//! This crate provides the gateway binary: configuration parsed from
//! CLI arguments and environment variables, the outbound
//! chat-completion client, and the immutable application state handed
//! to the HTTP layer (`elza-api`). Request handling lives in
//! `elza-api`, not here.

pub mod config;
pub mod openai;
pub mod state;

// Re-export server configuration and state types
pub use config::CliArgs;
pub use openai::{OpenAiClient, ProviderError};
pub use state::AppState;
