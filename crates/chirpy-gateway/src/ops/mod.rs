//! Operational and admin HTTP endpoints.
//!
//! - `GET /api/healthz`  : liveness
//! - `GET /admin/metrics`: fileserver hit count (HTML)
//! - `POST /admin/reset` : zero the hit counter and delete every user (dev only)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::render_admin_page;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const TEXT_HTML: &str = "text/html; charset=utf-8";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], "OK")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = render_admin_page(state.hits().load());
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_HTML)], body).into_response()
}

/// Reset is deliberately destructive: besides zeroing the hit counter it
/// deletes every user, and the storage cascade takes their chirps with them.
/// Outside the dev platform it is refused before anything is touched.
///
/// Users are deleted first; if that fails the counter keeps its value.
#[tracing::instrument(skip(state))]
pub async fn reset(State(state): State<AppState>) -> Response {
    if let Err(e) = state.ensure_dev() {
        tracing::warn!(platform = %state.cfg().platform, "reset refused outside dev platform");
        return (
            StatusCode::FORBIDDEN,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            e.client_message(),
        )
            .into_response();
    }

    if let Err(e) = state.store().delete_all_users().await {
        tracing::error!(error = %e, "reset: deleting users failed");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            "Internal Server Error",
        )
            .into_response();
    }

    state.hits().reset();
    tracing::info!("hit counter reset and all users deleted");
    let body = format!("Hits have been reset to {}", state.hits().load());
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}
