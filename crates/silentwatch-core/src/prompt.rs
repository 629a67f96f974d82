//! Prompt template for the explanation request.

use std::fmt;

use crate::baseline::{BASELINE_LATENCY_MS, BASELINE_OUTPUT_KB};
use crate::observation::Observation;

/// Rendered prompt text, ready to send to a text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Embed the baseline ranges and the current values.
    pub fn for_observation(obs: &Observation) -> Self {
        Self(format!(
            "You are a system reliability assistant.\n\
             \n\
             Normal system behavior:\n\
             Latency: {}–{} ms\n\
             Output size: {}–{} KB\n\
             \n\
             Current system behavior:\n\
             Latency: {} ms\n\
             Output size: {} KB\n\
             \n\
             Explain briefly why this is a silent failure.\n",
            BASELINE_LATENCY_MS.start(),
            BASELINE_LATENCY_MS.end(),
            BASELINE_OUTPUT_KB.start(),
            BASELINE_OUTPUT_KB.end(),
            obs.latency_ms,
            obs.output_size_kb,
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
