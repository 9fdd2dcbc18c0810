//! Request-terminal error responses for the operation handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::calc::RequestError;

/// Errors surfaced past authentication and rate limiting.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body failed validation.
    #[error(transparent)]
    BadRequest(#[from] RequestError),

    /// Path is outside the known operation set.
    #[error("invalid path")]
    UnknownPath,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::UnknownPath => (StatusCode::FORBIDDEN, "invalid path".to_string()),
        };

        tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::RequestError;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::from(RequestError::DivisionByZero).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_path_maps_to_403() {
        let response = ApiError::UnknownPath.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
