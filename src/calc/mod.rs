//! Arithmetic core subsystem.
//!
//! # Data Flow
//! ```text
//! Request body + resolved path
//!     → validate.rs (decode JSON, check required fields, zero-divisor check)
//!     → ops.rs (map path to operation, compute result)
//!     → OperationResult serialized into the response
//! ```
//!
//! # Design Decisions
//! - Validation is a pure function over the raw body; no I/O, no state
//! - Fixed i64 numeric contract, wrapping arithmetic
//! - Divide-by-zero is a validation failure, not a compute failure

pub mod ops;
pub mod validate;

pub use ops::{Operation, OperationResult};
pub use validate::{parse_request, OperationInput, RequestError};
