use tracing::error;

use backend_domain::ThresholdSettings;

use crate::{AppError, AppState};

/// Current threshold settings. The watcher's cached snapshot answers most
/// reads; the store is only hit before the first poll lands.
pub async fn threshold_settings(state: &AppState) -> Result<ThresholdSettings, AppError> {
    if let Some(snapshot) = state.settings_hub.latest() {
        return Ok(snapshot);
    }
    let loaded = state
        .settings
        .load_threshold_settings()
        .await
        .map_err(|err| {
            error!("failed to load threshold settings: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?
        .unwrap_or_default();
    Ok(loaded)
}
