//! `GET /status`: sample, classify, explain.
//!
//! Always answers 200. Generation failures end up in `explanation`.

use std::time::Instant;

use axum::{extract::State, Json};
use tracing::{debug, warn};

use silentwatch_core::explain::{self, Decision, Explanation};
use silentwatch_core::{Observation, StatusReport};

use crate::app_state::AppState;

pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    let obs = state.source().sample();
    if !obs.is_consistent() {
        warn!(?obs, "observation outside its band");
    }
    let silent = if obs.silent_failure { "true" } else { "false" };
    state.metrics().status_requests.inc(&[("silent_failure", silent)]);

    let explanation = explain_observation(&state, &obs).await;
    state.metrics().explanations.inc(&[("outcome", explanation.source.as_str())]);

    Json(StatusReport::new(&obs, explanation))
}

async fn explain_observation(state: &AppState, obs: &Observation) -> Explanation {
    let prompt = match explain::decide(obs) {
        Decision::Baseline => return Explanation::baseline(),
        Decision::Narrate(prompt) => prompt,
    };

    let generator = state.generator();
    let started = Instant::now();
    let outcome = generator.generate(&prompt).await;
    state
        .metrics()
        .generation_duration
        .observe(&[("provider", generator.name())], started.elapsed());

    match &outcome {
        Ok(_) => debug!(provider = generator.name(), latency_ms = obs.latency_ms, "explanation generated"),
        Err(e) => warn!(provider = generator.name(), error = %e, "explanation generation failed"),
    }

    explain::resolve(obs, outcome)
}
