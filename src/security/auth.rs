//! Session-token authentication middleware.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};

use crate::config::AuthConfig;
use crate::observability::metrics;

/// Header carrying the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Context attached to authenticated requests.
#[derive(Clone, Debug)]
pub struct UserContext {
    pub user: String,
}

/// Static token → user table, populated once at startup.
pub struct TokenStore {
    tokens: HashMap<String, String>,
}

impl TokenStore {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            tokens: config.tokens.clone(),
        }
    }

    /// Resolve a session token to its user identity.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }
}

/// Middleware resolving the session token and attaching the user identity.
///
/// Requests without a recognized token are rejected here and never reach
/// the rate limiter or the dispatcher.
pub async fn authenticate(
    State(store): State<Arc<TokenStore>>,
    mut req: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let token = req
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match store.resolve(token) {
        Some(user) => {
            tracing::debug!(user = %user, "Authenticated user");
            let ctx = UserContext {
                user: user.to_string(),
            };
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        None => {
            tracing::warn!("Rejected request with missing or unknown session token");
            metrics::record_auth_failure();
            (StatusCode::FORBIDDEN, "Forbidden").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_token() {
        let store = TokenStore::from_config(&AuthConfig::default());
        assert_eq!(store.resolve("00000000"), Some("user0"));
        assert_eq!(store.resolve("aaaaaaaa"), Some("userA"));
    }

    #[test]
    fn test_resolve_unknown_token() {
        let store = TokenStore::from_config(&AuthConfig::default());
        assert_eq!(store.resolve("ffffffff"), None);
        assert_eq!(store.resolve(""), None);
    }

    #[test]
    fn test_tokens_may_share_a_user() {
        let store = TokenStore::from_config(&AuthConfig::default());
        assert_eq!(store.resolve("deadbeef"), Some("user0"));
    }
}
