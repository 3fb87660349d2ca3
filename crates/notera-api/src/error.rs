//! API error mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Errors surfaced to HTTP clients.
///
/// Every response body uses the `{"errors": <message>}` shape.
#[derive(Debug)]
pub enum ApiError {
    /// Unexpected failure (store error etc.), HTTP 500.
    Internal(notera_core::Error),
    /// Missing/invalid/stale credential, HTTP 401.
    Unauthorized(String),
    /// Entity absent or not owned by the caller, HTTP 404.
    NotFound(String),
    /// Malformed or out-of-bounds input, HTTP 400.
    BadRequest(String),
    /// Duplicate unique key, HTTP 409.
    Conflict(String),
}

impl From<notera_core::Error> for ApiError {
    fn from(err: notera_core::Error) -> Self {
        match err {
            notera_core::Error::Validation(msg) => ApiError::BadRequest(msg),
            notera_core::Error::Unauthorized(msg) => ApiError::Unauthorized(msg),
            notera_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            notera_core::Error::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(serde_json::json!({
            "errors": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_validation_maps_to_bad_request() {
        let err: ApiError = notera_core::Error::Validation("bad".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_core_not_found_maps_to_not_found() {
        let err: ApiError = notera_core::Error::NotFound("Note not found".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_core_conflict_maps_to_conflict() {
        let err: ApiError = notera_core::Error::Conflict("taken".to_string()).into();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_core_internal_maps_to_internal() {
        let err: ApiError = notera_core::Error::Internal("boom".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
