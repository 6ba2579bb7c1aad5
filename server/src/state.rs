//! Shared application state for the gateway.
//!
//! The state is assembled once at startup from parsed configuration
//! and is immutable afterwards; requests only ever read it. All values
//! are trimmed here, the same way the health endpoint later reports
//! them.

use async_trait::async_trait;

use elza_api::AppStateProvider;

use crate::config::CliArgs;
use crate::openai::OpenAiClient;

/// Immutable gateway state.
pub struct AppState {
    model: String,
    server_token: String,
    client: OpenAiClient,
}

impl AppState {
    /// Build state from parsed configuration.
    pub fn new(args: &CliArgs) -> Self {
        let model = args.openai_model.trim().to_string();
        let base_url = args.openai_base_url.trim().trim_end_matches('/').to_string();

        Self {
            client: OpenAiClient::new(
                base_url,
                args.openai_api_key.trim().to_string(),
                model.clone(),
                args.timeout,
            ),
            model,
            server_token: args.server_token.trim().to_string(),
        }
    }
}

#[async_trait]
impl AppStateProvider for AppState {
    fn model(&self) -> &str {
        &self.model
    }

    fn key_loaded(&self) -> bool {
        self.client.key_loaded()
    }

    fn server_token(&self) -> &str {
        &self.server_token
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> anyhow::Result<String> {
        Ok(self.client.chat(system_prompt, user_prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_trimmed() {
        let args = CliArgs {
            openai_api_key: "  sk-test  ".to_string(),
            openai_model: " gpt-4o-mini ".to_string(),
            server_token: "  secret1  ".to_string(),
            ..CliArgs::defaults()
        };

        let state = AppState::new(&args);
        assert_eq!(state.model(), "gpt-4o-mini");
        assert_eq!(state.server_token(), "secret1");
        assert!(state.key_loaded());
    }

    #[test]
    fn whitespace_key_counts_as_missing() {
        let args = CliArgs {
            openai_api_key: "   ".to_string(),
            ..CliArgs::defaults()
        };

        let state = AppState::new(&args);
        assert!(!state.key_loaded());
    }

    #[test]
    fn empty_token_means_open_endpoint() {
        let state = AppState::new(&CliArgs::defaults());
        assert!(state.server_token().is_empty());
    }
}
