//! JSON resource handlers (users, chirps).
//!
//! Every handler returns `Result<_, ApiError>`; failures never escape the
//! request and are rendered as `{"error": "..."}` with a matching status.

pub mod chirps;
pub mod error;
pub mod users;

pub use error::ApiError;
