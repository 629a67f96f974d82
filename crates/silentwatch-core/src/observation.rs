use serde::{Deserialize, Serialize};

use crate::baseline::{
    BASELINE_LATENCY_MS, BASELINE_OUTPUT_KB, DEGRADED_LATENCY_MS, DEGRADED_OUTPUT_KB,
};

/// One synthetic metric sample. Lives for a single response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub latency_ms: u32,
    /// Rounded to two decimals.
    pub output_size_kb: f64,
    pub silent_failure: bool,
}

/// Classification recovered from the values alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Normal,
    SilentFailure,
}

impl Observation {
    pub fn new(latency_ms: u32, output_size_kb: f64, silent_failure: bool) -> Self {
        Self { latency_ms, output_size_kb: round2(output_size_kb), silent_failure }
    }

    /// Classify by range membership. `None` when the values sit in neither
    /// the baseline nor the degraded band (or straddle them).
    pub fn classify(&self) -> Option<Classification> {
        let lat = self.latency_ms;
        let size = self.output_size_kb;
        if BASELINE_LATENCY_MS.contains(&lat) && BASELINE_OUTPUT_KB.contains(&size) {
            Some(Classification::Normal)
        } else if DEGRADED_LATENCY_MS.contains(&lat) && DEGRADED_OUTPUT_KB.contains(&size) {
            Some(Classification::SilentFailure)
        } else {
            None
        }
    }

    /// True when the flag agrees with the ranges the values fall in.
    pub fn is_consistent(&self) -> bool {
        match self.classify() {
            Some(Classification::Normal) => !self.silent_failure,
            Some(Classification::SilentFailure) => self.silent_failure,
            None => false,
        }
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        let o = Observation::new(600, 0.7349, true);
        assert_eq!(o.output_size_kb, 0.73);
    }

    #[test]
    fn classify_matches_bands() {
        assert_eq!(Observation::new(210, 1.2, false).classify(), Some(Classification::Normal));
        assert_eq!(
            Observation::new(800, 0.6, true).classify(),
            Some(Classification::SilentFailure)
        );
        assert_eq!(Observation::new(300, 1.2, false).classify(), None);
        assert_eq!(Observation::new(210, 0.7, false).classify(), None);
    }

    #[test]
    fn inconsistent_flag_detected() {
        assert!(Observation::new(210, 1.2, false).is_consistent());
        assert!(!Observation::new(210, 1.2, true).is_consistent());
        assert!(!Observation::new(650, 0.7, false).is_consistent());
    }
}
