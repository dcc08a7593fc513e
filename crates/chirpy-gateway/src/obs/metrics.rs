//! Hit counter and the middleware that feeds it.

use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

/// Monotonic request counter; only [`HitCounter::reset`] moves it back to zero.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn load(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Atomic store of zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

/// Count the request, then forward it unchanged.
///
/// Mounted on the `/app` static file service only; API and admin routes are
/// never counted.
pub async fn count_hits(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.hits().inc();
    tracing::debug!(path = %req.uri().path(), "hit counted");
    next.run(req).await
}

/// HTML fragment served by `GET /admin/metrics`.
pub fn render_admin_page(hits: u64) -> String {
    format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>"
    )
}
