//! Operation handlers.

use axum::{
    body::Bytes,
    http::{StatusCode, Uri},
    Json,
};

use crate::calc::{parse_request, Operation, OperationResult};
use crate::http::error::ApiError;

/// Handler for the four operation routes.
///
/// The request path decides the operation. The body is validated before
/// dispatch; a divide with a zero divisor never reaches `apply`.
pub async fn handle_operation(
    uri: Uri,
    body: Bytes,
) -> Result<(StatusCode, Json<OperationResult>), ApiError> {
    let op = Operation::from_path(uri.path()).ok_or(ApiError::UnknownPath)?;
    let input = parse_request(&body, op)?;
    let output = op.apply(input.number1, input.number2);

    tracing::debug!(
        number1 = input.number1,
        number2 = input.number2,
        path = op.path(),
        output,
        "Computed operation"
    );

    Ok((StatusCode::ACCEPTED, Json(OperationResult { output })))
}

/// Fallback for any path outside the known set, reached only past auth.
pub async fn unknown_path() -> ApiError {
    ApiError::UnknownPath
}
