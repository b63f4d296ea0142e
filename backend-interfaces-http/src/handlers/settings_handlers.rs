use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::settings_commands::{self, ThresholdUpdate};
use backend_application::queries::settings_queries;
use backend_application::AppState;
use backend_domain::ThresholdSettings;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_threshold_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ThresholdSettings>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let settings = settings_queries::threshold_settings(&state).await?;
    Ok(Json(settings))
}

pub async fn update_threshold_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ThresholdUpdate>,
) -> Result<Json<ThresholdSettings>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let saved = settings_commands::save_threshold_settings(&state, payload).await?;
    Ok(Json(saved))
}
