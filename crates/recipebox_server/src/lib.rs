//! HTTP façade for RecipeBox.
//!
//! # Responsibility
//! - Expose the catalog over `GET`/`POST /api/recipes`.
//! - Own request parsing and response shaping, never persistence.

pub mod config;
pub mod http;

pub use config::ServerConfig;
pub use http::build_router;

use anyhow::Context;
use log::{info, warn};
use recipebox_core::{JsonFileRecipeStore, RecipeService};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub(crate) service: Arc<RecipeService<JsonFileRecipeStore>>,
}

impl AppState {
    /// Builds state over the collection file at `data_file`.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        let store = JsonFileRecipeStore::new(data_file);
        Self {
            service: Arc::new(RecipeService::new(store)),
        }
    }
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        "event=server_start module=server status=ok addr={} data_file={} version={}",
        addr,
        config.data_file.display(),
        recipebox_core::core_version()
    );

    let app = build_router(AppState::new(config.data_file));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(
            "event=server_signal module=server status=error error_code=signal_unavailable error={}",
            err
        );
        std::future::pending::<()>().await;
    }
}
