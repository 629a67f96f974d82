//! Top-level facade crate for silentwatch.
//!
//! Re-exports the domain core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use silentwatch_core::*;
}

pub mod gateway {
    pub use silentwatch_gateway::*;
}
