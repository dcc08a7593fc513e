//! Chirpy gateway library entry.
//!
//! This crate wires configuration, storage, hit counting, and the HTTP
//! handlers into a single axum router. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
