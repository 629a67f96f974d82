//! Lightweight in-process metrics.
//!
//! Counters and a latency histogram stored as atomics in `DashMap` shards and
//! rendered by the `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::ReporterMetrics;
