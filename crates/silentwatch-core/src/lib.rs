//! silentwatch core: baseline model, metric simulation, and the explanation ladder.
//!
//! This crate holds everything about a status report that does not depend on
//! HTTP: the baseline constants, the synthetic [`Observation`], the prompt
//! template sent to a text-generation service, and the pure mapping from a
//! generation outcome to the user-visible explanation. It carries no runtime
//! or network dependencies so the gateway and tests can share it freely.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod baseline;
pub mod error;
pub mod explain;
pub mod observation;
pub mod prompt;
pub mod report;
pub mod simulator;

/// Shared result type.
pub use error::{GenerationError, Result, SilentWatchError};
pub use explain::{Decision, Explanation, ExplanationSource};
pub use observation::{Classification, Observation};
pub use prompt::Prompt;
pub use report::StatusReport;
