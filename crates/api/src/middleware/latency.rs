use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Delay every request by the configured `latency_ms` before handling it.
pub async fn simulate_latency(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let delay = state.config.latency_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    next.run(request).await
}
