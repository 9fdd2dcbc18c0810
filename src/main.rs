use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use calc_api::config::{load_config, ServiceConfig};
use calc_api::observability::{logging, metrics};
use calc_api::HttpServer;

#[derive(Parser)]
#[command(name = "calc-api")]
#[command(about = "Token-authenticated arithmetic HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.observability)?;

    tracing::info!("calc-api v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        min_interval_secs = config.rate_limit.min_interval_secs,
        known_tokens = config.auth.tokens.len(),
        log_file = config.observability.log_file.as_deref().unwrap_or("<stdout>"),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
