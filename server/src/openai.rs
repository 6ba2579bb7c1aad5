//! Outbound chat-completions client.
//!
//! One operation: send the fixed system instruction plus the user's
//! prompt to the provider's `/chat/completions` endpoint and return the
//! first choice's text. Everything that can go wrong on the way is a
//! [`ProviderError`]; the HTTP layer decides what to do with it.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the completion provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure, timeout, or a non-success HTTP status
    #[error("provider transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered 2xx with an empty choice list
    #[error("provider returned no choices")]
    NoChoices,
}

/// One chat turn on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    // Providers send null content for some finish reasons
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client bound to one provider, model, and timeout.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    /// Create a client. `base_url` is the provider root without the
    /// `/chat/completions` suffix.
    pub fn new(base_url: String, api_key: String, model: String, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Whether an API key is configured.
    pub fn key_loaded(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Issue one completion request and return the first choice's text.
    pub async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
        };

        let response: ChatCompletionResponse = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::NoChoices)?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};

    #[test]
    fn request_wire_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "sistēmas instrukcija".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "Sveiki".to_string(),
                },
            ],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "Sveiki");
    }

    #[test]
    fn response_wire_shape() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Labdien!"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Labdien!")
        );
    }

    #[test]
    fn null_content_deserializes() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.choices[0].message.content, None);
    }

    /// Bind a throwaway provider stub and return its base URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn chat_returns_first_choice_text() {
        let stub = Router::new().route(
            "/chat/completions",
            post(|| async {
                Json(serde_json::json!({
                    "choices": [{"message": {"role": "assistant", "content": "Labdien!"}}]
                }))
            }),
        );
        let base_url = spawn_stub(stub).await;

        let client = OpenAiClient::new(base_url, "sk-test".to_string(), "gpt-4o-mini".to_string(), 5);
        let text = client.chat("sistēma", "Sveiki").await.unwrap();
        assert_eq!(text, "Labdien!");
    }

    #[tokio::test]
    async fn empty_choice_list_is_an_error() {
        let stub = Router::new().route(
            "/chat/completions",
            post(|| async { Json(serde_json::json!({"choices": []})) }),
        );
        let base_url = spawn_stub(stub).await;

        let client = OpenAiClient::new(base_url, "sk-test".to_string(), "gpt-4o-mini".to_string(), 5);
        let result = client.chat("sistēma", "Sveiki").await;
        assert!(matches!(result, Err(ProviderError::NoChoices)));
    }

    #[tokio::test]
    async fn provider_error_status_is_transport_error() {
        let stub = Router::new().route(
            "/chat/completions",
            post(|| async {
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream exploded",
                )
            }),
        );
        let base_url = spawn_stub(stub).await;

        let client = OpenAiClient::new(base_url, "sk-test".to_string(), "gpt-4o-mini".to_string(), 5);
        let result = client.chat("sistēma", "Sveiki").await;
        assert!(matches!(result, Err(ProviderError::Transport(_))));
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let stub = Router::new().route(
            "/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Json(serde_json::json!({"choices": []}))
            }),
        );
        let base_url = spawn_stub(stub).await;

        let client = OpenAiClient::new(base_url, "sk-test".to_string(), "gpt-4o-mini".to_string(), 1);
        let result = client.chat("sistēma", "Sveiki").await;
        match result {
            Err(ProviderError::Transport(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn key_loaded_reflects_key_presence() {
        let with_key = OpenAiClient::new(
            "http://localhost".to_string(),
            "sk-test".to_string(),
            "m".to_string(),
            1,
        );
        assert!(with_key.key_loaded());

        let without_key = OpenAiClient::new(
            "http://localhost".to_string(),
            String::new(),
            "m".to_string(),
            1,
        );
        assert!(!without_key.key_loaded());
    }
}
