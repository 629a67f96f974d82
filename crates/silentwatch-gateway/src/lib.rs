//! silentwatch gateway library entry.
//!
//! Wires config, the text generation port, metrics, and the `/status`
//! handler into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod generation;
pub mod obs;
pub mod ops;
pub mod router;
pub mod source;
pub mod status;
