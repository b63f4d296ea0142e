use tokio::sync::watch;

use backend_domain::ThresholdSettings;

/// Latest-snapshot-wins fan-in for threshold settings. The polling watcher
/// and the save command both publish here; readers only ever observe the
/// newest snapshot, matching the store's callback ordering guarantee.
pub struct SettingsStreamHub {
    tx: watch::Sender<Option<ThresholdSettings>>,
}

impl Default for SettingsStreamHub {
    fn default() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }
}

impl SettingsStreamHub {
    pub fn publish(&self, snapshot: ThresholdSettings) {
        self.tx.send_replace(Some(snapshot));
    }

    pub fn latest(&self) -> Option<ThresholdSettings> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ThresholdSettings>> {
        self.tx.subscribe()
    }
}
