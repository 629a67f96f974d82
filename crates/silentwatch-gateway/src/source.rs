//! Where observations come from.

use silentwatch_core::{simulator, Observation};

/// Produces one observation per request.
pub trait MetricSource: Send + Sync {
    fn sample(&self) -> Observation;
}

/// Fresh random sample on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMetrics;

impl MetricSource for RandomMetrics {
    fn sample(&self) -> Observation {
        simulator::simulate()
    }
}
