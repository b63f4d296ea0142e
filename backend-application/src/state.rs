use std::sync::Arc;

use backend_domain::ports::{
    FileTransferService, OrderRepository, SalesRepository, ScanLogRepository, SettingsRepository,
    UserRepository,
};
use backend_domain::RuntimeConfig;

use crate::ops::SettingsStreamHub;
use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub scan_logs: Arc<dyn ScanLogRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub sales: Arc<dyn SalesRepository>,
    pub users: Arc<dyn UserRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub files: Arc<dyn FileTransferService>,
    pub settings_hub: Arc<SettingsStreamHub>,
    pub metrics: Arc<Metrics>,
}
