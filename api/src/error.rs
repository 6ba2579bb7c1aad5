//! Error types for the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types surfaced to clients.
///
/// The gateway only ever answers with two error statuses; completion
/// provider failures are absorbed into a 200 fallback reply instead, so
/// there is deliberately no 5xx variant here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer credential missing or mismatched (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed or incomplete request (400)
    #[error("{0}")]
    BadRequest(String),
}

/// Error body returned for every 4xx response.
///
/// The mobile client keys off the `error` field, so the shape is part of
/// the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_renders_exact_body() {
        let err = ApiError::Unauthorized;
        assert_eq!(err.to_string(), "Unauthorized");

        let body = ErrorBody {
            error: err.to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Unauthorized"}"#);
    }

    #[test]
    fn bad_request_message_is_the_body_verbatim() {
        let err = ApiError::BadRequest("Missing prompt".into());
        assert_eq!(err.to_string(), "Missing prompt");
    }

    #[test]
    fn status_codes() {
        let resp = ApiError::Unauthorized.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = ApiError::BadRequest("Missing prompt".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
