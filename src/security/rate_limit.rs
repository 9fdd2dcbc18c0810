//! Per-user rate limiting middleware.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::RateLimitConfig;
use crate::observability::metrics;
use crate::security::auth::UserContext;

/// State for the per-user rate limiter.
pub struct LimiterState {
    /// last admitted request per user
    last_admitted: Mutex<HashMap<String, Instant>>,
    min_interval: Duration,
}

impl LimiterState {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            last_admitted: Mutex::new(HashMap::new()),
            min_interval: Duration::from_secs(config.min_interval_secs),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Admit or reject a request from `user` arriving now.
    pub fn try_admit(&self, user: &str) -> bool {
        self.try_admit_at(user, Instant::now())
    }

    /// Rejected requests leave the stored timestamp untouched, so the
    /// admission window is always measured from the last admitted request.
    fn try_admit_at(&self, user: &str, now: Instant) -> bool {
        let mut last = self
            .last_admitted
            .lock()
            .expect("rate limiter mutex poisoned");
        match last.get(user) {
            Some(&prev) if now.duration_since(prev) < self.min_interval => false,
            _ => {
                last.insert(user.to_string(), now);
                true
            }
        }
    }
}

/// Middleware enforcing the per-user admission interval.
pub async fn enforce_rate_limit(
    State(state): State<Arc<LimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // Authentication runs first and always attaches a UserContext.
    // Fail closed if it is somehow absent.
    let Some(user) = request
        .extensions()
        .get::<UserContext>()
        .map(|ctx| ctx.user.clone())
    else {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    if state.try_admit(&user) {
        next.run(request).await
    } else {
        tracing::warn!(user = %user, "Rate limit exceeded");
        metrics::record_rate_limited();
        let body = format!(
            "please give {} seconds between Request",
            state.min_interval().as_secs()
        );
        (StatusCode::TOO_EARLY, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(secs: u64) -> LimiterState {
        LimiterState::new(&RateLimitConfig {
            min_interval_secs: secs,
        })
    }

    #[test]
    fn test_first_request_admitted() {
        let state = limiter(5);
        assert!(state.try_admit_at("user0", Instant::now()));
    }

    #[test]
    fn test_request_within_window_rejected() {
        let state = limiter(5);
        let t0 = Instant::now();
        assert!(state.try_admit_at("user0", t0));
        assert!(!state.try_admit_at("user0", t0 + Duration::from_secs(3)));
    }

    #[test]
    fn test_request_after_window_admitted() {
        let state = limiter(5);
        let t0 = Instant::now();
        assert!(state.try_admit_at("user0", t0));
        assert!(state.try_admit_at("user0", t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_rejection_does_not_reset_window() {
        let state = limiter(5);
        let t0 = Instant::now();
        assert!(state.try_admit_at("user0", t0));
        // Rejected attempt at t0+4 must not push the window forward.
        assert!(!state.try_admit_at("user0", t0 + Duration::from_secs(4)));
        assert!(state.try_admit_at("user0", t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_users_limited_independently() {
        let state = limiter(5);
        let t0 = Instant::now();
        assert!(state.try_admit_at("user0", t0));
        assert!(state.try_admit_at("userA", t0));
        assert!(!state.try_admit_at("user0", t0 + Duration::from_secs(1)));
        assert!(!state.try_admit_at("userA", t0 + Duration::from_secs(1)));
    }
}
