//! Token-authenticated arithmetic HTTP service.
//!
//! # Architecture Overview
//! ```text
//! Client request
//!     → security::auth       (X-Session-Token → user identity, 403 otherwise)
//!     → security::rate_limit (per-user admission interval, 425 otherwise)
//!     → http::request_log    (buffer + record the final response)
//!     → calc::validate       (decode + check the two operands, 400 otherwise)
//!     → calc::ops            (add / subtract / multiply / divide)
//!     → 202 {"output": n}
//! ```

pub mod calc;
pub mod config;
pub mod http;
pub mod observability;
pub mod security;

pub use config::ServiceConfig;
pub use http::HttpServer;
