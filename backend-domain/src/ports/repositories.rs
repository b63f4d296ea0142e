use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::entities::{
    AccountUser, Order, PlacementParameter, SalesOrder, ScanDay, TelegramUser, ThresholdSettings,
};

// Store reads return `Ok(None)` (or an empty key list) for an absent path
// and `Err` only for transport/store failures. Callers must never conflate
// the two: "no data" renders an empty view, an error renders an error state.

#[async_trait]
pub trait ScanLogRepository: Send + Sync {
    /// Months of the given year holding at least one stored day.
    async fn fetch_months(&self, year: i32) -> anyhow::Result<Vec<u32>>;
    /// Days of the given month holding stored scan data.
    async fn fetch_days(&self, year: i32, month: u32) -> anyhow::Result<Vec<u32>>;
    async fn fetch_scan_events(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> anyhow::Result<Option<ScanDay>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn fetch_orders(&self) -> anyhow::Result<Option<Vec<Order>>>;
    async fn fetch_placement_parameters(&self) -> anyhow::Result<Option<Vec<PlacementParameter>>>;
}

#[async_trait]
pub trait SalesRepository: Send + Sync {
    async fn fetch_sales_orders(&self) -> anyhow::Result<Option<Vec<SalesOrder>>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_telegram_users(&self) -> anyhow::Result<Option<BTreeMap<String, TelegramUser>>>;
    async fn save_telegram_user(&self, chat_id: &str, user: &TelegramUser) -> anyhow::Result<()>;
    async fn delete_telegram_user(&self, chat_id: &str) -> anyhow::Result<()>;
    async fn list_accounts(&self) -> anyhow::Result<Option<BTreeMap<String, AccountUser>>>;
    async fn save_account(&self, user_id: &str, account: &AccountUser) -> anyhow::Result<()>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load_threshold_settings(&self) -> anyhow::Result<Option<ThresholdSettings>>;
    async fn save_threshold_settings(&self, settings: &ThresholdSettings) -> anyhow::Result<()>;
}
