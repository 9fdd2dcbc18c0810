//! Request body validation.
//!
//! # Responsibilities
//! - Decode the JSON body into two required i64 fields
//! - Name the missing field when one is absent
//! - Reject a zero divisor before the divide operation dispatches
//!
//! # Design Decisions
//! - Pure parse+validate: no side effects, no request state
//! - Type mismatches (string, float token) surface as the serde_json error

use serde::Deserialize;
use thiserror::Error;

use crate::calc::ops::Operation;

/// Wire shape of the request body. Fields are optional here so that a
/// missing field can be reported by name instead of as a decode error.
#[derive(Debug, Deserialize)]
struct RawOperationRequest {
    number1: Option<i64>,
    number2: Option<i64>,
}

/// A fully validated pair of operands, ready for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationInput {
    pub number1: i64,
    pub number2: i64,
}

/// Validation failures for an operation request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Body is not valid JSON or a field has the wrong JSON type.
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A required field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Divide requested with a zero divisor.
    #[error("Division by 0")]
    DivisionByZero,
}

/// Decode and validate a request body for the given operation.
pub fn parse_request(body: &[u8], op: Operation) -> Result<OperationInput, RequestError> {
    let raw: RawOperationRequest = serde_json::from_slice(body)?;

    let number1 = raw.number1.ok_or(RequestError::MissingField("number1"))?;
    let number2 = raw.number2.ok_or(RequestError::MissingField("number2"))?;

    if op == Operation::Divide && number2 == 0 {
        return Err(RequestError::DivisionByZero);
    }

    Ok(OperationInput { number1, number2 })
}
