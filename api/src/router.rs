//! Router configuration and setup.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::ApiConfig, middleware, routes, traits::AppStateProvider};

/// Configure routes and middleware.
///
/// Middleware layers are applied before `.with_state()` for proper
/// Axum 0.8 type inference. Header capture stays off in the trace
/// layer: the Authorization header carries the shared secret and must
/// not reach the log stream.
pub fn configure_routes(state: Arc<dyn AppStateProvider>, config: &ApiConfig) -> Router {
    use crate::route_trait::RegisterableRoute;

    let mut router = Router::new();

    // Register trait-based routes
    router = routes::root::RootRoute::register(router);
    router = routes::health::HealthRoute::register(router);
    router = routes::reply::ReplyRoute::register(router);

    // Manual route: GET probes against the reply path get a usage hint
    // (405) instead of a bare method rejection.
    router = router.route("/elza/reply", get(routes::reply::reply_usage_hint));

    // Add OpenAPI documentation if enabled
    router = if config.enable_swagger {
        let openapi = routes::ApiDoc::openapi();

        router.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", openapi))
    } else {
        router
    };

    router = router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(middleware::cors_layer(config));

    router.with_state(state)
}
