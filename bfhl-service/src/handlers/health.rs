use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;
use service_core::observability::render_metrics;

use crate::models::Envelope;
use crate::startup::AppState;

/// Liveness check: static service identity.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(Envelope::healthy(&state.config.identity.official_email)),
    )
}

/// Readiness check. The service holds no connections, so it is ready as soon
/// as it accepts requests.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics() -> Result<impl IntoResponse, AppError> {
    let body = render_metrics().ok_or(AppError::ServiceUnavailable)?;
    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        body,
    ))
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("No such route"))
}
