//! Chirpy gateway binary.
//!
//! - Config from `CHIRPY_CONFIG` (optional YAML) plus env overrides, with `.env` as fallback
//! - PostgreSQL store with embedded migrations
//! - Tracing via `RUST_LOG` (default `info`)

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use chirpy_core::error::{ChirpyError, Result};
use chirpy_gateway::{app_state::AppState, config, router, store::PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = config::load_from_env()?;
    let listen = cfg.server.listen_addr()?;

    let store = PgStore::connect(&cfg.database.url).await?;
    store.migrate().await?;
    tracing::info!("database ready");

    tracing::info!(platform = %cfg.platform, assets = %cfg.server.assets_root, "config loaded");
    let state = AppState::new(cfg, Arc::new(store));
    let app = router::build_router(state);

    tracing::info!(%listen, "chirpy-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ChirpyError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ChirpyError::Internal(format!("server failed: {e}")))
}
