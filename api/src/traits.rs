//! Traits for API integration.

use async_trait::async_trait;

/// Backing state the gateway routes run against.
///
/// The completion provider sits behind this trait so the server crate
/// can wire in a real client while tests substitute a stub that never
/// touches the network.
#[async_trait]
pub trait AppStateProvider: Send + Sync {
    /// Configured completion model identifier.
    fn model(&self) -> &str;

    /// Whether a provider API key was present (non-empty) at startup.
    fn key_loaded(&self) -> bool;

    /// Shared-secret bearer token. An empty value disables
    /// authorization entirely and leaves the reply endpoint open.
    fn server_token(&self) -> &str;

    /// Issue one chat-style completion and return the generated text.
    ///
    /// Any failure here (transport, timeout, malformed provider
    /// response) is absorbed by the caller into a fallback reply.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> anyhow::Result<String>;
}
