//! Health check endpoint.

use axum::http::Method;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::route_trait::{RouteHandler, RouteMetadata};
use crate::traits::AppStateProvider;

/// Health check request (empty for GET endpoint).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HealthRequest;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always true; the probe itself never fails
    pub ok: bool,
    /// Configured completion model
    pub model: String,
    /// Whether a provider API key is loaded
    pub key_loaded: bool,
}

/// Health check route handler.
///
/// Reports the configured model and whether the provider key is
/// loaded, with no authentication. Used by the mobile app to decide
/// whether online replies are even possible before it sends a prompt.
pub struct HealthRoute;

#[async_trait]
impl RouteHandler for HealthRoute {
    type Request = HealthRequest;
    type Response = HealthResponse;

    fn metadata() -> RouteMetadata {
        RouteMetadata {
            path: "/health",
            method: Method::GET,
            tags: &["System"],
            description: "Reports configured model and provider key presence",
            idempotent: true,
            requires_auth: false,
        }
    }

    async fn validate_request(_req: &Self::Request) -> ApiResult<()> {
        Ok(())
    }

    async fn handle<S>(_req: Self::Request, state: &S) -> ApiResult<Self::Response>
    where
        S: AppStateProvider + Send + Sync + ?Sized,
    {
        let request_id = uuid::Uuid::new_v4();

        tracing::debug!(
            request_id = %request_id,
            model = %state.model(),
            key_loaded = state.key_loaded(),
            "Health check"
        );

        Ok(HealthResponse {
            ok: true,
            model: state.model().to_string(),
            key_loaded: state.key_loaded(),
        })
    }
}

crate::enforce_route_handler!(HealthRoute);
