//! Chirp content pipeline.
//!
//! Submitted text passes the length check first and is then redacted by the
//! profanity filter. Both steps are pure: no I/O, no shared state.

pub mod filter;
pub mod validate;

pub use filter::clean;
pub use validate::{validate_chirp, MAX_CHIRP_LEN};
