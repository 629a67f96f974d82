//! Text generation port.
//!
//! The explanation provider talks to a [`TextGenerator`]. Which implementation
//! backs it is a configuration decision made once at startup.

pub mod gemini;
pub mod offline;

use std::sync::Arc;

use async_trait::async_trait;

use silentwatch_core::error::{GenerationError, Result};
use silentwatch_core::Prompt;

use crate::config::{GenerationSection, ProviderKind};

pub use gemini::GeminiGenerator;
pub use offline::OfflineGenerator;

/// One best-effort attempt at turning a prompt into text. No retries.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;
    async fn generate(&self, prompt: &Prompt) -> std::result::Result<String, GenerationError>;
}

/// Build the configured generator.
///
/// A Gemini provider without an API key degrades to [`OfflineGenerator`].
pub fn from_config(cfg: &GenerationSection) -> Result<Arc<dyn TextGenerator>> {
    match (cfg.provider, cfg.api_key.as_deref()) {
        (ProviderKind::Gemini, Some(key)) => {
            Ok(Arc::new(GeminiGenerator::new(&cfg.gemini, key.to_string())?))
        }
        (ProviderKind::Gemini, None) => {
            tracing::warn!("GEMINI_API_KEY not set; explanations will use the fallback sentence");
            Ok(Arc::new(OfflineGenerator))
        }
        (ProviderKind::Offline, _) => Ok(Arc::new(OfflineGenerator)),
    }
}
