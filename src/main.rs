//! Property Cache - property listing service with a read-through cache
//!
//! Serves the full property collection from a shared cache backend, falling
//! back to the record store on a miss, and reports the backend hit ratio.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use property_cache::api::create_router;
use property_cache::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the property service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the record store and both cache tiers
/// 4. Start background TTL cleanup task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting property service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, max_entries={}, collection_ttl={}s, response_cache_ttl={}s, cleanup_interval={}s",
        config.server_port,
        config.max_entries,
        config.collection_ttl,
        config.response_cache_ttl,
        config.cleanup_interval
    );

    match &config.properties_file {
        Some(path) => info!("Reading property records from {}", path.display()),
        None => warn!("PROPERTIES_FILE not set, serving an empty listing"),
    }

    let state = AppState::from_config(&config);

    let cleanup_handle = spawn_cleanup_task(state.cache_tiers(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
