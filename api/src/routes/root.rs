//! Root liveness probe.

use axum::http::Method;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::route_trait::{RouteHandler, RouteMetadata};
use crate::traits::AppStateProvider;

/// Root probe request (empty for GET endpoint).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RootRequest;

/// Root probe response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Always true
    pub ok: bool,
    /// Pointer to the useful endpoints
    pub hint: String,
}

/// Root route handler.
///
/// Answers any GET against `/` so the gateway can be checked from a
/// browser or a load balancer without a JSON client.
pub struct RootRoute;

#[async_trait]
impl RouteHandler for RootRoute {
    type Request = RootRequest;
    type Response = RootResponse;

    fn metadata() -> RouteMetadata {
        RouteMetadata {
            path: "/",
            method: Method::GET,
            tags: &["System"],
            description: "Liveness probe with a usage hint",
            idempotent: true,
            requires_auth: false,
        }
    }

    async fn validate_request(_req: &Self::Request) -> ApiResult<()> {
        Ok(())
    }

    async fn handle<S>(_req: Self::Request, _state: &S) -> ApiResult<Self::Response>
    where
        S: AppStateProvider + Send + Sync + ?Sized,
    {
        Ok(RootResponse {
            ok: true,
            hint: "Try GET /health or POST /elza/reply".to_string(),
        })
    }
}

crate::enforce_route_handler!(RootRoute);
