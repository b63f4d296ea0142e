use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

use backend_application::ops::SettingsStreamHub;
use backend_application::{AppState, Metrics};
use backend_infrastructure::{AppConfig, HttpFileTransferService, RealtimeStoreRepo};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let store_config = config.to_store_config();

        let http_client = Client::builder()
            .timeout(Duration::from_secs(
                runtime_config.request_timeout_seconds.max(3),
            ))
            .build()?;

        let store = Arc::new(RealtimeStoreRepo::new(http_client.clone(), store_config));
        let files = Arc::new(HttpFileTransferService::new(
            http_client,
            runtime_config.upload_api_url.clone(),
        ));

        let state = AppState {
            config: runtime_config,
            scan_logs: store.clone(),
            orders: store.clone(),
            sales: store.clone(),
            users: store.clone(),
            settings: store,
            files,
            settings_hub: Arc::new(SettingsStreamHub::default()),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
