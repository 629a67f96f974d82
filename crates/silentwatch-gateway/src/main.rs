//! silentwatch gateway
//!
//! - `GET /status`: synthetic metrics, classified against the baseline, with
//!   an explanation for silent failures
//! - `GET /healthz`, `GET /metrics`
//! - Config: optional `silentwatch.yaml`, then `PORT` / `GEMINI_API_KEY`

use tracing_subscriber::{fmt, EnvFilter};

use silentwatch_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = config::load().expect("config load failed");
    let listen = cfg.server.listen_addr().expect("server address invalid");

    let state = app_state::AppState::new(&cfg).expect("app state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "silentwatch-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
