//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (Axum setup, middleware chain)
//!     → security::auth (X-Session-Token → user identity)
//!     → security::rate_limit (per-user admission interval)
//!     → request_log.rs (buffer + record the final response)
//!     → handlers.rs (validate body, dispatch operation)
//!     → Response to client
//! ```

pub mod error;
pub mod handlers;
pub mod request_log;
pub mod server;

pub use error::ApiError;
pub use server::HttpServer;
