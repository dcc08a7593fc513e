//! Fileserver hit counting.
//!
//! A single process-wide counter, bumped by middleware on the static asset
//! path and read/reset through the admin endpoints. Nothing is persisted
//! across restarts.

pub mod metrics;

pub use metrics::{count_hits, render_admin_page, HitCounter};
