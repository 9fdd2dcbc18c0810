//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → auth.rs (resolve X-Session-Token against the token store)
//!     → rate_limit.rs (check per-user admission interval)
//!     → Pass to logging + dispatch
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - Token table is immutable after startup; no locking on the read path
//! - Rate limiter keyed purely by resolved user identity

pub mod auth;
pub mod rate_limit;

pub use auth::{TokenStore, UserContext, SESSION_TOKEN_HEADER};
pub use rate_limit::LimiterState;
