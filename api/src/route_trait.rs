//! Route handler trait system.
//!
//! Every route must provide metadata (path, method, description),
//! request validation, and a handler, and is registered against the
//! shared `Arc<dyn AppStateProvider>` state. Registration also enforces
//! the bearer-token check for routes whose metadata asks for it, so a
//! handler never runs behind a failed authorization.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, Method};
use axum::Json;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::traits::AppStateProvider;

/// Route metadata describing each registered route.
#[derive(Debug, Clone)]
pub struct RouteMetadata {
    /// HTTP path (e.g., "/elza/reply")
    pub path: &'static str,
    /// HTTP method
    pub method: Method,
    /// OpenAPI tags for grouping
    pub tags: &'static [&'static str],
    /// Description for documentation
    pub description: &'static str,
    /// Is this route idempotent?
    pub idempotent: bool,
    /// Enforce the shared-secret bearer check before the handler runs?
    pub requires_auth: bool,
}

/// Route handler trait - all routes implement this.
///
/// Request bodies are parsed leniently: an absent or malformed JSON
/// body degrades to `Self::Request::default()`, and `validate_request`
/// then decides whether that is acceptable. The mobile client sometimes
/// posts empty bodies, so a parse failure must not surface as a
/// framework-shaped rejection.
#[async_trait]
pub trait RouteHandler: Send + Sync + 'static {
    /// Request type, deserialized from the JSON body
    type Request: DeserializeOwned + Debug + Default + Send + Sync;

    /// Response type, serialized as the JSON body of a 200 response
    type Response: Serialize + Debug + Send + Sync;

    /// Provide route metadata.
    fn metadata() -> RouteMetadata;

    /// Validate the request before `handle` is called.
    ///
    /// Return `ApiError::BadRequest` for validation failures.
    async fn validate_request(req: &Self::Request) -> ApiResult<()>;

    /// Handle the request.
    async fn handle<S>(req: Self::Request, state: &S) -> ApiResult<Self::Response>
    where
        S: AppStateProvider + Send + Sync + ?Sized;

    /// Verify this route follows the registration rules.
    fn verify_implementation() -> bool {
        let metadata = Self::metadata();

        if metadata.path.is_empty() {
            panic!("Route has empty path");
        }

        if metadata.description.is_empty() {
            panic!("Route {} has empty description - MUST document route", metadata.path);
        }

        true
    }
}

/// Compare the request's bearer credential against the shared-secret
/// token.
///
/// An empty configured token means no auth is enforced; this is the
/// documented open mode, not a bypass. A missing header or a
/// non-bearer scheme counts as an empty credential and fails the
/// comparison when a token is configured.
pub(crate) fn authorize(headers: &HeaderMap, server_token: &str) -> ApiResult<()> {
    if server_token.is_empty() {
        return Ok(());
    }

    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .unwrap_or("");

    if bearer != server_token {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

/// Route registration trait - for adding routes to the router.
///
/// Auto-implemented for all `RouteHandler` implementations. Uses the
/// concrete `Arc<dyn AppStateProvider>` state type for Axum 0.8
/// compatibility.
pub trait RegisterableRoute: RouteHandler {
    /// Register this route with the Axum router.
    fn register(
        router: axum::Router<Arc<dyn AppStateProvider>>,
    ) -> axum::Router<Arc<dyn AppStateProvider>> {
        let metadata = Self::metadata();

        type AppState = Arc<dyn AppStateProvider>;

        let handler = |State(state): State<AppState>, headers: HeaderMap, body: Bytes| async move {
            // Authorization runs first: a rejected request must never
            // reach validation or trigger an outbound provider call.
            if Self::metadata().requires_auth {
                authorize(&headers, state.server_token())?;
            }

            let req: Self::Request = serde_json::from_slice(&body).unwrap_or_default();

            Self::validate_request(&req).await?;

            let response = Self::handle(req, state.as_ref()).await?;

            Ok::<_, ApiError>(Json(response))
        };

        match metadata.method {
            Method::GET => router.route(metadata.path, axum::routing::get(handler)),
            Method::POST => router.route(metadata.path, axum::routing::post(handler)),
            _ => panic!("Unsupported HTTP method: {}", metadata.method),
        }
    }
}

// Auto-implement RegisterableRoute for all RouteHandler implementations
impl<T: RouteHandler> RegisterableRoute for T {}

/// Macro to enforce route handler implementation and verify rules.
///
/// Usage:
/// ```ignore
/// enforce_route_handler!(ReplyRoute);
/// ```
#[macro_export]
macro_rules! enforce_route_handler {
    ($route_type:ty) => {
        const _: () = {
            fn assert_route_handler<T: $crate::route_trait::RouteHandler>() {}
            fn assert_registerable<T: $crate::route_trait::RegisterableRoute>() {}

            #[allow(dead_code)]
            fn check() {
                assert_route_handler::<$route_type>();
                assert_registerable::<$route_type>();

                <$route_type as $crate::route_trait::RouteHandler>::verify_implementation();
            }
        };
    };
}
