//! Shared application state for the Chirpy gateway.
//!
//! Cloned into every handler; the counter and store are shared behind `Arc`.

use std::sync::Arc;

use chirpy_core::error::{ChirpyError, Result};

use crate::config::ChirpyConfig;
use crate::obs::HitCounter;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ChirpyConfig,
    store: Arc<dyn Store>,
    hits: HitCounter,
}

impl AppState {
    /// Build state around an already connected store. The hit counter starts at zero.
    pub fn new(cfg: ChirpyConfig, store: Arc<dyn Store>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                hits: HitCounter::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &ChirpyConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    pub fn hits(&self) -> &HitCounter {
        &self.inner.hits
    }

    /// Gate for destructive admin operations.
    pub fn ensure_dev(&self) -> Result<()> {
        if self.inner.cfg.is_dev() {
            Ok(())
        } else {
            Err(ChirpyError::Forbidden)
        }
    }
}
