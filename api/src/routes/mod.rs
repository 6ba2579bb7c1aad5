//! API route handlers.

pub mod health;
pub mod reply;
pub mod root;

use utoipa::OpenApi;

/// OpenAPI documentation for all routes.
///
/// NOTE: Using trait-based routes. Path entries will be generated from
/// `RouteMetadata` in a future iteration; component schemas are listed
/// here so Swagger UI can render the request and response shapes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Elza Gateway API",
        version = "0.1.0",
        description = "HTTP gateway relaying prompts to a chat-completion provider for the Elza voice assistant",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development"),
    ),
    paths(),
    components(schemas(
        root::RootResponse,
        health::HealthResponse,
        reply::ReplyRequest,
        reply::ReplyResponse,
        crate::error::ErrorBody,
    ))
)]
pub struct ApiDoc;
