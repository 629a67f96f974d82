//! Shared application state for the status reporter.
//!
//! Everything the handler needs is injected here at startup: the metric
//! source, the text generator (and with it the API key), and metrics.

use std::sync::Arc;

use silentwatch_core::error::Result;

use crate::config::ReporterConfig;
use crate::generation::{self, TextGenerator};
use crate::obs::ReporterMetrics;
use crate::source::{MetricSource, RandomMetrics};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    source: Arc<dyn MetricSource>,
    generator: Arc<dyn TextGenerator>,
    metrics: ReporterMetrics,
}

impl AppState {
    /// Build state from config: random metrics plus the configured generator.
    pub fn new(cfg: &ReporterConfig) -> Result<Self> {
        let generator = generation::from_config(&cfg.generation)?;
        tracing::info!(provider = generator.name(), "text generator selected");
        Ok(Self::with_parts(Arc::new(RandomMetrics), generator))
    }

    /// Build state from explicit parts. Tests use this to pin observations
    /// and stub the generator.
    pub fn with_parts(source: Arc<dyn MetricSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { source, generator, metrics: ReporterMetrics::default() }),
        }
    }

    pub fn source(&self) -> &dyn MetricSource {
        self.inner.source.as_ref()
    }

    pub fn generator(&self) -> &dyn TextGenerator {
        self.inner.generator.as_ref()
    }

    pub fn metrics(&self) -> &ReporterMetrics {
        &self.inner.metrics
    }
}
