//! Middleware for the API.

mod cors;

pub use cors::cors_layer;
