//! Freight quote HTTP server.

use anyhow::Context;
use clap::Parser;
use freight_quote::api::rest::{AppState, create_router};
use freight_quote::infrastructure::{AppConfig, init_tracing};
use std::path::PathBuf;

/// Freight quote service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long, env = "FREIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the configuration.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configuration.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging)?;

    let quote_service = config.build_quote_service().inspect_err(|e| {
        tracing::error!(error = %e, "refusing to start with invalid pricing configuration");
    })?;

    let router = create_router(AppState::new(quote_service));
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "freight quote service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("freight quote service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
