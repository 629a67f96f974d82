//! Explanation policy and the fallback ladder.
//!
//! `decide` chooses between the static baseline message and a narration
//! request. `resolve` turns the single generation attempt into the text the
//! client sees. Both are pure; the gateway owns the actual outbound call.

use crate::error::GenerationError;
use crate::observation::Observation;
use crate::prompt::Prompt;

pub const BASELINE_MESSAGE: &str = "System behavior is within the normal baseline range.";
pub const RATE_LIMITED_MESSAGE: &str =
    "Gemini rate limit reached; AI explanation is temporarily unavailable.";
pub const ENDPOINT_UNAVAILABLE_MESSAGE: &str =
    "Gemini endpoint not accessible for the configured model.";

/// What the handler should do with an observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Within baseline: answer with [`BASELINE_MESSAGE`].
    Baseline,
    /// Silent failure: ask the provider to narrate.
    Narrate(Prompt),
}

/// Where an explanation came from. Used as a metrics label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationSource {
    Baseline,
    Generated,
    RateLimited,
    EndpointUnavailable,
    ProviderError,
    Fallback,
}

impl ExplanationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ExplanationSource::Baseline => "baseline",
            ExplanationSource::Generated => "generated",
            ExplanationSource::RateLimited => "rate_limited",
            ExplanationSource::EndpointUnavailable => "endpoint_unavailable",
            ExplanationSource::ProviderError => "provider_error",
            ExplanationSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub text: String,
    pub source: ExplanationSource,
}

impl Explanation {
    fn new(text: impl Into<String>, source: ExplanationSource) -> Self {
        Self { text: text.into(), source }
    }

    pub fn baseline() -> Self {
        Self::new(BASELINE_MESSAGE, ExplanationSource::Baseline)
    }
}

pub fn decide(obs: &Observation) -> Decision {
    if obs.silent_failure {
        Decision::Narrate(Prompt::for_observation(obs))
    } else {
        Decision::Baseline
    }
}

/// Deterministic sentence used whenever no narration can be obtained.
pub fn fallback_sentence(obs: &Observation) -> String {
    format!(
        "Silent failure detected: latency ({} ms) and output size ({} KB) deviate from the \
         baseline without explicit errors, indicating degraded internal processing or partial \
         service malfunction.",
        obs.latency_ms, obs.output_size_kb
    )
}

/// Map one generation outcome onto the explanation ladder.
pub fn resolve(obs: &Observation, outcome: Result<String, GenerationError>) -> Explanation {
    match outcome {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                Explanation::new(fallback_sentence(obs), ExplanationSource::Fallback)
            } else {
                Explanation::new(text, ExplanationSource::Generated)
            }
        }
        Err(GenerationError::RateLimited) => {
            Explanation::new(RATE_LIMITED_MESSAGE, ExplanationSource::RateLimited)
        }
        Err(GenerationError::NotFound) => {
            Explanation::new(ENDPOINT_UNAVAILABLE_MESSAGE, ExplanationSource::EndpointUnavailable)
        }
        Err(GenerationError::Status(code)) => Explanation::new(
            format!("Gemini error (status {code})."),
            ExplanationSource::ProviderError,
        ),
        Err(
            GenerationError::Unavailable
            | GenerationError::Transport(_)
            | GenerationError::Malformed(_),
        ) => Explanation::new(fallback_sentence(obs), ExplanationSource::Fallback),
    }
}
