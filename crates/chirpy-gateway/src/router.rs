//! Axum router wiring.
//!
//! Exact method + path bindings only. The `/app` static file service is the
//! one subtree wrapped by the hit-counting middleware; `route_layer` keeps it
//! off the fallback, so unrouted paths are never counted.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let assets = Router::new()
        .nest_service("/app", ServeDir::new(&state.cfg().server.assets_root))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::count_hits));

    Router::new()
        .route("/api/healthz", get(ops::healthz))
        .route("/admin/metrics", get(ops::metrics))
        .route("/admin/reset", post(ops::reset))
        .route("/api/validate_chirp", post(api::chirps::validate))
        .route("/api/users", post(api::users::create_user))
        .route(
            "/api/chirps",
            post(api::chirps::create_chirp).get(api::chirps::list_chirps),
        )
        .route("/api/chirps/:chirp_id", get(api::chirps::get_chirp))
        .with_state(state)
        .merge(assets)
        .layer(TraceLayer::new_for_http())
}
