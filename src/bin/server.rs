//! # Lottoscope Server
//!
//! Thin wrapper binary that loads configuration, bootstraps the service and
//! waits for a shutdown signal.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin lottoscope-server
//!
//! # Run with a config file and JSON logs
//! LOTTOSCOPE_CONFIG_PATH=config/lottoscope.toml LOG_FORMAT=json cargo run --bin lottoscope-server
//! ```

use tokio::signal;
use tracing::{error, info, warn};

use lottoscope::config::ConfigLoader;
use lottoscope::logging;
use lottoscope::ServiceBootstrap;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    info!("Starting Lottoscope Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "   Build Mode: {}",
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );
    info!("   Environment: {}", ConfigLoader::detect_environment());

    let config = ConfigLoader::load_from_env()
        .map_err(|e| format!("Failed to load configuration: {e}"))?;

    info!("   Source page: {}", config.scraper.url);
    info!(
        "   Cache TTL: {}s, refresh every {}s ({})",
        config.cache.ttl_seconds,
        config.cache.refresh_interval_seconds,
        if config.cache.refresh_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    let handle = ServiceBootstrap::bootstrap(config)
        .await
        .map_err(|e| format!("Failed to bootstrap service: {e}"))?;

    info!("Lottoscope listening on http://{}", handle.local_addr);
    info!("   Press Ctrl+C to shutdown gracefully");

    shutdown_signal().await;

    info!("Shutdown signal received, initiating graceful shutdown...");

    if let Err(e) = handle.stop().await {
        error!("Failed to stop service cleanly: {}", e);
    } else {
        info!("Lottoscope Server shutdown complete");
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
