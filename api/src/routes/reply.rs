//! Elza reply endpoint.
//!
//! The one functional operation of the gateway: forward the user's
//! prompt to the completion provider and relay the generated text.
//! Provider failures never surface as HTTP errors; the client app
//! treats any non-200 as a hard failure, so instability degrades to a
//! canned conversational fallback instead.

use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::route_trait::{RouteHandler, RouteMetadata};
use crate::traits::AppStateProvider;

/// Fixed system instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str =
    "Tu esi Elza — draudzīga un gudra balss asistente latviešu valodā.";

/// Apology prefix returned in place of a provider failure; the
/// original prompt is appended so the conversation can continue.
pub const FALLBACK_PREFIX: &str =
    "Pašlaik nevaru iegūt gudru atbildi tiešsaistē. Pastāsti sīkāk: ";

fn default_lang() -> String {
    "lv-LV".to_string()
}

/// Reply request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplyRequest {
    /// User prompt; must be non-empty after trimming
    #[serde(default)]
    pub prompt: String,

    /// Locale tag of the client, e.g. "lv-LV"
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for ReplyRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            lang: default_lang(),
        }
    }
}

/// Reply response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReplyResponse {
    /// Generated or fallback conversational text
    pub reply: String,
}

/// Conversational reply route handler.
pub struct ReplyRoute;

#[async_trait]
impl RouteHandler for ReplyRoute {
    type Request = ReplyRequest;
    type Response = ReplyResponse;

    fn metadata() -> RouteMetadata {
        RouteMetadata {
            path: "/elza/reply",
            method: Method::POST,
            tags: &["Elza"],
            description: "Forwards a prompt to the completion provider and relays the reply",
            idempotent: false,
            requires_auth: true,
        }
    }

    async fn validate_request(req: &Self::Request) -> ApiResult<()> {
        if req.prompt.trim().is_empty() {
            return Err(ApiError::BadRequest("Missing prompt".into()));
        }

        Ok(())
    }

    async fn handle<S>(req: Self::Request, state: &S) -> ApiResult<Self::Response>
    where
        S: AppStateProvider + Send + Sync + ?Sized,
    {
        let request_id = uuid::Uuid::new_v4();
        let prompt = req.prompt.trim();

        tracing::info!(
            request_id = %request_id,
            lang = %req.lang.trim(),
            prompt_chars = prompt.chars().count(),
            "Reply request received"
        );

        match state.complete(SYSTEM_PROMPT, prompt).await {
            Ok(text) => {
                let reply = text.trim().to_string();

                tracing::info!(
                    request_id = %request_id,
                    reply_chars = reply.chars().count(),
                    "Reply generated"
                );

                Ok(ReplyResponse { reply })
            }
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    error = %e,
                    "Completion provider failed, returning fallback reply"
                );

                Ok(ReplyResponse {
                    reply: format!("{}{}", FALLBACK_PREFIX, prompt),
                })
            }
        }
    }
}

crate::enforce_route_handler!(ReplyRoute);

/// Usage hint for GET probes against the reply path.
///
/// Browsers and curl without flags land here; answer 405 with the
/// correct invocation instead of a bare method rejection.
pub async fn reply_usage_hint() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({
            "ok": false,
            "hint": r#"Use POST /elza/reply with JSON body {"prompt":"...","lang":"lv-LV"}"#,
        })),
    )
}
