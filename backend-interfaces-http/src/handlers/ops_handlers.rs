use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
}

pub async fn health_live() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn health_ready(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    state
        .scan_logs
        .ping()
        .await
        .map_err(|err| HttpError::Internal(format!("store unreachable: {}", err)))?;
    Ok(Json(HealthStatus { status: "ready" }))
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render_prometheus(),
    ))
}
