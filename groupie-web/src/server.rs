//! Startup sequence
//!
//! Load, then bind, then serve. The listener is only bound after every
//! upstream collection has loaded, so a failed load never accepts a
//! connection.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use groupie_common::config::TomlConfig;
use groupie_common::ResourceKind;
use tracing::{error, info, warn};

use crate::client::ApiClient;
use crate::loader;
use crate::render::HtmlRenderer;
use crate::{build_router, AppState};

/// Serve until Ctrl+C or SIGTERM
pub async fn run(config: TomlConfig) -> Result<()> {
    run_until(config, shutdown_signal()).await
}

/// Serve until `shutdown` resolves
pub async fn run_until<F>(config: TomlConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let renderer = HtmlRenderer::new().context("Failed to prepare page layout")?;
    let client = ApiClient::new(config.api.request_timeout())
        .context("Failed to build upstream API client")?;

    let store = loader::load_all(&client, &config.api.urls(), config.api.profile)
        .await
        .map_err(|e| {
            error!(resource = %e.kind, error = %e.source, "Startup load failed, not serving");
            e
        })?;
    info!(
        artists = store.count(ResourceKind::Artists),
        locations = store.count(ResourceKind::Locations),
        dates = store.count(ResourceKind::Dates),
        relations = store.count(ResourceKind::Relations),
        "Data store ready"
    );

    let state = AppState::new(store, Arc::new(renderer))
        .with_request_timeout(config.server.request_timeout());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where the platform has it
///
/// If no handler can be installed this never resolves and the process runs
/// until killed.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("Received Ctrl+C, shutting down"),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
                }
                return;
            }
            Err(e) => warn!(error = %e, "No SIGTERM handler, waiting for Ctrl+C only"),
        }
    }

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            error!(error = %e, "No Ctrl+C handler, shutdown only by kill");
            std::future::pending::<()>().await;
        }
    }
}
