//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the four operation routes
//! - Wire up middleware (auth, rate limiting, request logging, body limit)
//! - Bind server to listener
//! - Serve until shutdown signal

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, routing::post, Router};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::{handlers, request_log};
use crate::security::{auth, rate_limit, LimiterState, TokenStore};

/// HTTP server for the arithmetic service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Builds the token store and rate limiter state here and injects them
    /// into the middleware; nothing is process-global.
    pub fn new(config: ServiceConfig) -> Self {
        let tokens = Arc::new(TokenStore::from_config(&config.auth));
        let limiter = Arc::new(LimiterState::new(&config.rate_limit));

        let router = Self::build_router(&config, tokens, limiter);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers apply bottom-up: authentication runs first, then the rate
    /// limiter, then request logging closest to the handlers so it records
    /// the final status and body. Each stage short-circuits on rejection.
    fn build_router(
        config: &ServiceConfig,
        tokens: Arc<TokenStore>,
        limiter: Arc<LimiterState>,
    ) -> Router {
        Router::new()
            .route("/add/", post(handlers::handle_operation))
            .route("/subtract/", post(handlers::handle_operation))
            .route("/multiply/", post(handlers::handle_operation))
            .route("/divide/", post(handlers::handle_operation))
            .fallback(handlers::unknown_path)
            .layer(middleware::from_fn(request_log::log_requests))
            .layer(middleware::from_fn_with_state(
                limiter,
                rate_limit::enforce_rate_limit,
            ))
            .layer(middleware::from_fn_with_state(tokens, auth::authenticate))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TraceLayer::new_for_http())
    }

    /// Consume the server, returning its router. Used by in-process tests.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
