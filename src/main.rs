//! Encrypted admin navigation service (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │              NAVIGATION SERVICE              │
//!                         │                                              │
//!     Browser request     │  ┌─────────┐    ┌──────────────────────┐     │
//!     ────────────────────┼─▶│  http   │───▶│  routing             │     │
//!     /<tok>/<tok>/new    │  │ server  │    │  path → codec →      │     │
//!                         │  └─────────┘    │  registry → router   │     │
//!                         │       ▲         └──────────┬───────────┘     │
//!     Navigation state    │       │                    │                 │
//!     or redirect home    │       └────────────────────┘                 │
//!     ◀───────────────────┼──                                            │
//!                         │  ┌────────────────────────────────────────┐  │
//!                         │  │          Cross-Cutting Concerns        │  │
//!                         │  │  config (+ hot reload) · observability │  │
//!                         │  │  lifecycle (signals, shutdown) · api   │  │
//!                         │  └────────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use admin_nav::config::{load_config, AppConfig, ConfigWatcher};
use admin_nav::lifecycle::{signals::shutdown_signal, Shutdown};
use admin_nav::observability::{logging, metrics};
use admin_nav::{EncryptedRouter, HttpServer};

#[derive(Parser)]
#[command(name = "admin-nav")]
#[command(about = "Encrypted admin navigation service", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long, env = "ADMIN_NAV_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability);
    tracing::info!("admin-nav v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        home_path = %config.router.home_path,
        "Configuration loaded"
    );

    // Build codec and registry before taking traffic.
    let router = EncryptedRouter::global();
    tracing::info!(
        vocabulary = router.codec().len(),
        routes = router.registry().len(),
        "Route tables ready"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Keep the watcher handle alive for the lifetime of the server.
    let (config_updates, _watcher) = match &args.config {
        Some(path) => {
            let (watcher, rx) = ConfigWatcher::new(path);
            (rx, Some(watcher.run()?))
        }
        None => {
            let (_, rx) = mpsc::unbounded_channel();
            (rx, None)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
