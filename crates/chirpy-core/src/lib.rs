//! Chirpy core: domain models, error taxonomy, and the chirp content pipeline.
//!
//! This crate defines the entities, request shapes, and validation rules shared
//! by the gateway and any other front end. It intentionally carries no
//! transport or runtime dependencies so the pipeline can be exercised without
//! an HTTP server or a database.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ChirpyError`/`Result` so a hostile
//! request body can never take the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod content;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{ChirpyError, Result};
