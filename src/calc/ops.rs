//! Operation dispatch: path → arithmetic operation → result.

use serde::{Deserialize, Serialize};

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Resolve a request path to an operation.
    ///
    /// Returns `None` for any path outside the fixed set of four.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/add/" => Some(Self::Add),
            "/subtract/" => Some(Self::Subtract),
            "/multiply/" => Some(Self::Multiply),
            "/divide/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Path this operation is served under, used for logging and metrics labels.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Add => "/add/",
            Self::Subtract => "/subtract/",
            Self::Multiply => "/multiply/",
            Self::Divide => "/divide/",
        }
    }

    /// Compute the operation over two operands.
    ///
    /// Wrapping semantics throughout. For `Divide`, `b` is non-zero by the
    /// time dispatch happens (the validator rejects a zero divisor first).
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Subtract => a.wrapping_sub(b),
            Self::Multiply => a.wrapping_mul(b),
            Self::Divide => a.wrapping_div(b),
        }
    }
}

/// Response body for a computed operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct OperationResult {
    pub output: i64,
}
