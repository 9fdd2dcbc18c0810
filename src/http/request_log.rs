//! Request logging middleware.
//!
//! # Responsibilities
//! - Buffer the downstream response so status and body can be recorded
//! - Emit one structured line per completed request
//! - Record per-request metrics
//!
//! # Design Decisions
//! - Innermost layer: only observes what auth and rate limiting admitted
//! - Never rejects or drops a request

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::observability::metrics;
use crate::security::auth::UserContext;

/// Upper bound when buffering a response body for logging. Handler bodies
/// are small JSON or short text; this is headroom, not a working limit.
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Middleware recording one structured line per completed request.
pub async fn log_requests(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4();
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user = request
        .extensions()
        .get::<UserContext>()
        .map(|ctx| ctx.user.clone())
        .unwrap_or_default();

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Failed to buffer response body for logging"
            );
            Bytes::new()
        }
    };

    tracing::info!(
        request_id = %request_id,
        remote = %addr,
        method = %method,
        url = %uri,
        elapsed = ?started.elapsed(),
        status = parts.status.as_u16(),
        user = %user,
        body = %String::from_utf8_lossy(&bytes),
        "Request completed"
    );
    metrics::record_request(method.as_str(), uri.path(), parts.status.as_u16(), started);

    Response::from_parts(parts, Body::from(bytes))
}
