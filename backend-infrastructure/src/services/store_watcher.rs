// Polling subscription over the threshold-settings path

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use backend_application::ops::SettingsStreamHub;
use backend_domain::ports::SettingsRepository;

/// Each successful fetch publishes a snapshot into the hub; a failed poll
/// keeps the previous snapshot current and retries on the next tick.
pub struct SettingsWatcher {
    repo: Arc<dyn SettingsRepository>,
    hub: Arc<SettingsStreamHub>,
    poll_interval: Duration,
}

impl SettingsWatcher {
    pub fn new(
        repo: Arc<dyn SettingsRepository>,
        hub: Arc<SettingsStreamHub>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            repo,
            hub,
            poll_interval,
        }
    }

    pub fn start(self) -> WatcherHandle {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.poll_interval);
            loop {
                ticker.tick().await;
                match self.repo.load_threshold_settings().await {
                    Ok(Some(snapshot)) => self.hub.publish(snapshot),
                    Ok(None) => debug!("threshold settings path holds no data"),
                    Err(err) => warn!("threshold settings poll failed: {}", err),
                }
            }
        });
        WatcherHandle { task }
    }
}

pub struct WatcherHandle {
    task: JoinHandle<()>,
}

impl WatcherHandle {
    pub fn stop(self) {
        self.task.abort();
    }
}
