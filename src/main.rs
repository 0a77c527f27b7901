//! Orthanc modality gateway binary.
//!
//! Loads configuration, binds the listener, and runs the HTTP gateway
//! until a shutdown signal arrives.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orthanc_gateway::config::load_config;
use orthanc_gateway::http::HttpServer;
use orthanc_gateway::lifecycle::Shutdown;

#[derive(Parser)]
#[command(name = "orthanc-gateway")]
#[command(about = "Web front-end for managing DICOM modalities on an Orthanc server", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. A missing file falls back to
    /// defaults plus environment overrides.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,

    /// Override the configured bind address (e.g. "127.0.0.1:5000").
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "orthanc_gateway={},tower_http=info",
                    config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("orthanc-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_url = %config.upstream.url,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
