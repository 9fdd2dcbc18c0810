//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Route output to stdout and, when configured, an append-mode log file
//!
//! # Design Decisions
//! - RUST_LOG overrides the configured level
//! - File sink is ANSI-free so the log file stays machine-parseable
//! - Failure to open the log file is fatal at startup

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber from the observability config.
pub fn init(config: &ObservabilityConfig) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("calc_api={},tower_http=info", config.log_level))
    });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Arc::new(file)),
                )
                .init();
        }
        None => registry.init(),
    }

    Ok(())
}
