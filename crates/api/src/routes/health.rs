//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use health::{HealthService, HealthStatus};

use crate::AppState;

/// GET /health — returns the status reported by the injected health service.
pub async fn check<H: HealthService + 'static>(
    State(state): State<Arc<AppState<H>>>,
) -> Json<HealthStatus> {
    let status = state.health_service.health().await;
    if !status.is_up() {
        tracing::warn!(status = %status.status, "health service reports not up");
    }
    Json(status)
}
