//! Metric simulator.
//!
//! A fair coin decides whether the sample is a silent failure, then each field
//! is drawn uniformly from the matching band.

use rand::Rng;

use crate::baseline::{
    BASELINE_LATENCY_MS, BASELINE_OUTPUT_KB, DEGRADED_LATENCY_MS, DEGRADED_OUTPUT_KB,
};
use crate::observation::Observation;

/// Draw an observation from the thread-local RNG.
pub fn simulate() -> Observation {
    simulate_with(&mut rand::thread_rng())
}

/// Draw an observation from `rng`.
pub fn simulate_with<R: Rng>(rng: &mut R) -> Observation {
    let silent_failure = rng.gen_bool(0.5);

    let (latency_ms, output_size_kb) = if silent_failure {
        (rng.gen_range(DEGRADED_LATENCY_MS), rng.gen_range(DEGRADED_OUTPUT_KB))
    } else {
        (rng.gen_range(BASELINE_LATENCY_MS), rng.gen_range(BASELINE_OUTPUT_KB))
    };

    Observation::new(latency_ms, output_size_kb, silent_failure)
}
