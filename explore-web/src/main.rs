//! explore-web - Project Explore catalog service
//!
//! Serves the gateway, chapter dashboard and printable activity sheets over
//! HTTP, backed by a static catalog loaded once at startup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use explore_common::config::{CliOverrides, LoggingConfig, ServiceConfig};
use explore_common::{Catalog, ContentResolver};
use explore_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for explore-web
#[derive(Parser, Debug)]
#[command(name = "explore-web")]
#[command(about = "Project Explore catalog service")]
#[command(version)]
struct Args {
    /// TOML config file (default: <config dir>/project-explore/config.toml)
    #[arg(short, long, env = "EXPLORE_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind
    #[arg(short, long)]
    bind: Option<String>,

    /// Catalog JSON to serve instead of the embedded one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Thumbnail host prefix
    #[arg(long)]
    thumbnail_base: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            port: self.port,
            bind_address: self.bind.clone(),
            catalog_path: self.catalog.clone(),
            thumbnail_base_url: self.thumbnail_base.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolved before tracing so the configured level applies from the start
    let config =
        ServiceConfig::resolve(&args.overrides()).context("Failed to resolve configuration")?;

    init_tracing(&config.logging)?;

    // Build identification first, before any catalog work
    info!(
        "Starting Project Explore (explore-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config.config_file {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file, using defaults"),
    }

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => {
            info!("Using embedded catalog");
            Catalog::embedded().context("Embedded catalog is invalid")?
        }
    };
    if !catalog.warnings().is_empty() {
        warn!(
            "Catalog loaded with {} warning(s); affected chapters show placeholders",
            catalog.warnings().len()
        );
    }

    let catalog = Arc::new(catalog);
    let resolver = match &config.thumbnail_base_url {
        Some(base) => {
            info!("Thumbnail base: {}", base);
            ContentResolver::with_thumbnail_base(catalog, base.as_str())
        }
        None => ContentResolver::new(catalog),
    };

    let app = build_router(AppState::new(resolver));

    let addr = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("explore-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Console logging, plus a plain-text copy to `logging.file` when set
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let default_directives = format!("{},tower_http=info", logging.level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
