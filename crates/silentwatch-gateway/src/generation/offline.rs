use async_trait::async_trait;

use silentwatch_core::error::GenerationError;
use silentwatch_core::Prompt;

use super::TextGenerator;

/// Generator with no backing service. Always `Unavailable`, which the
/// explanation ladder turns into the deterministic fallback sentence.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn generate(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable)
    }
}
