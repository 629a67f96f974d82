//! Expected and degraded operating ranges.
//!
//! The two latency ranges and the two output-size ranges are disjoint, so an
//! observation's classification can always be recovered from its values.

use std::ops::RangeInclusive;

/// Normal latency in milliseconds.
pub const BASELINE_LATENCY_MS: RangeInclusive<u32> = 180..=250;
/// Normal output size in kilobytes.
pub const BASELINE_OUTPUT_KB: RangeInclusive<f64> = 1.1..=1.3;

/// Latency produced while silently failing.
pub const DEGRADED_LATENCY_MS: RangeInclusive<u32> = 500..=800;
/// Output size produced while silently failing.
pub const DEGRADED_OUTPUT_KB: RangeInclusive<f64> = 0.6..=0.8;
