//! bandview-web - Artist catalog web service
//!
//! Fetches the four upstream collections at startup, joins them into
//! an in-memory catalog, and serves the browsing UI, the filterable
//! JSON listing, artist detail, and the catalog export.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bandview_common::config::Config;
use bandview_web::upstream::UpstreamClient;
use bandview_web::{build_router, AppState};
use clap::Parser;
use tokio::signal;
use tracing::info;

/// Command-line arguments for bandview-web
#[derive(Parser, Debug)]
#[command(name = "bandview-web")]
#[command(about = "Artist catalog web service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "BANDVIEW_PORT")]
    port: Option<u16>,

    /// Upstream API base URL
    #[arg(short, long, env = "BANDVIEW_UPSTREAM")]
    upstream: Option<String>,

    /// Optional TOML config file
    #[arg(short, long, env = "BANDVIEW_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting Bandview web service v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = Config::resolve(args.port, args.upstream, args.config.as_deref())
        .context("Failed to resolve configuration")?;

    info!("Upstream API: {}", config.upstream_base_url);

    // Startup is all-or-nothing: requests are only served once every
    // upstream collection has been fetched and joined.
    let client = UpstreamClient::new(&config.upstream_base_url)
        .context("Failed to build upstream client")?;
    let catalog = client
        .fetch_catalog()
        .await
        .context("Failed to load catalog from upstream API")?;

    info!("Catalog loaded: {} artists", catalog.len());

    let state = AppState::new(catalog);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("bandview-web listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
