//! Top-level facade crate for Chirpy.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use chirpy_core::*;
}

pub mod gateway {
    pub use chirpy_gateway::*;
}
