//! Axum router wiring.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, ops, status};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status::status))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
