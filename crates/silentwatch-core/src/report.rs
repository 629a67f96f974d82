//! JSON body of `GET /status`.

use serde::{Deserialize, Serialize};

use crate::explain::Explanation;
use crate::observation::Observation;

pub const SYSTEM_STATUS_RUNNING: &str = "Running";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub system_status: String,
    pub silent_failure: bool,
    pub latency_ms: u32,
    pub output_size_kb: f64,
    pub explanation: String,
}

impl StatusReport {
    pub fn new(obs: &Observation, explanation: Explanation) -> Self {
        Self {
            system_status: SYSTEM_STATUS_RUNNING.to_string(),
            silent_failure: obs.silent_failure,
            latency_ms: obs.latency_ms,
            output_size_kb: obs.output_size_kb,
            explanation: explanation.text,
        }
    }
}
