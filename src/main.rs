//! Accept-Events demo server.
//!
//! Echoes every request back as JSON together with the event preferences
//! negotiated from its `Accept-Events` header.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use accept_events::config::{load_config, validate_config, ConfigError, ServerConfig};
use accept_events::http::HttpServer;
use accept_events::observability::logging::{init_logging, LogFormat};
use accept_events::observability::metrics;

#[derive(Parser)]
#[command(name = "accept-events-server")]
#[command(about = "Echo server demonstrating Accept-Events negotiation", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the log format ("pretty" or "json").
    #[arg(long)]
    log_format: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(format) = &cli.log_format {
        config.observability.log_format = format.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let format = LogFormat::parse(&config.observability.log_format).unwrap_or(LogFormat::Pretty);
    init_logging(&config.observability.log_level, format);

    tracing::info!("accept-events-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
