use chrono::Local;
use serde::Deserialize;
use tracing::error;

use backend_domain::ThresholdSettings;

use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdUpdate {
    #[serde(default)]
    pub threshold: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Persists the settings with a fresh `DD-MM-YYYY HH:MM:SS` stamp and
/// publishes the new snapshot to the hub.
pub async fn save_threshold_settings(
    state: &AppState,
    update: ThresholdUpdate,
) -> Result<ThresholdSettings, AppError> {
    let settings = ThresholdSettings {
        threshold: update.threshold.unwrap_or(0),
        message: update.message.unwrap_or_default(),
        update_date: Local::now().format("%d-%m-%Y %H:%M:%S").to_string(),
    };

    state
        .settings
        .save_threshold_settings(&settings)
        .await
        .map_err(|err| {
            error!("failed to save threshold settings: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;

    state.settings_hub.publish(settings.clone());
    Ok(settings)
}
