// Key-path realtime store client.
//
// The store is a Firebase-style REST tree: `GET {base}/{prefix}/{path}.json`
// answers 200 with the JSON body `null` for an absent path. That is a valid
// "no data" response and must stay distinct from transport errors.

use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use backend_domain::ports::{
    OrderRepository, SalesRepository, ScanLogRepository, SettingsRepository, UserRepository,
};
use backend_domain::{
    AccountUser, Order, PlacementParameter, SalesOrder, ScanDay, StoreConfig, TelegramUser,
    ThresholdSettings,
};

pub struct RealtimeStoreRepo {
    client: Client,
    config: StoreConfig,
}

impl RealtimeStoreRepo {
    pub fn new(client: Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        let base = &self.config.base_url;
        if path.is_empty() {
            format!("{}/{}.json", base, self.config.prefix)
        } else {
            format!("{}/{}/{}.json", base, self.config.prefix, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.client.request(method, self.url(path));
        if let Some(token) = &self.config.auth_token {
            request = request.query(&[("auth", token.as_str())]);
        }
        request
    }

    async fn get_value(&self, path: &str, shallow: bool) -> Result<Option<serde_json::Value>> {
        let mut request = self.request(Method::GET, path);
        if shallow {
            request = request.query(&[("shallow", "true")]);
        }
        let response = request
            .send()
            .await
            .with_context(|| format!("store read failed: {}", path))?
            .error_for_status()
            .with_context(|| format!("store rejected read: {}", path))?;
        let value: serde_json::Value = response
            .json()
            .await
            .with_context(|| format!("store answered non-JSON at {}", path))?;
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get_value(path, false).await? {
            None => Ok(None),
            Some(value) => {
                let record = serde_json::from_value(value)
                    .with_context(|| format!("malformed record at {}", path))?;
                Ok(Some(record))
            }
        }
    }

    /// Shallow read: child key names only, without their subtrees.
    async fn child_keys(&self, path: &str) -> Result<Vec<String>> {
        match self.get_value(path, true).await? {
            None => Ok(Vec::new()),
            Some(serde_json::Value::Object(map)) => Ok(map.keys().cloned().collect()),
            Some(_) => Err(anyhow!("expected a key mapping at {}", path)),
        }
    }

    async fn write<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> Result<()> {
        self.request(method, path)
            .json(body)
            .send()
            .await
            .with_context(|| format!("store write failed: {}", path))?
            .error_for_status()
            .with_context(|| format!("store rejected write: {}", path))?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path)
            .send()
            .await
            .with_context(|| format!("store delete failed: {}", path))?
            .error_for_status()
            .with_context(|| format!("store rejected delete: {}", path))?;
        Ok(())
    }
}

fn numeric_keys(keys: Vec<String>) -> Vec<u32> {
    keys.iter().filter_map(|key| key.parse().ok()).collect()
}

#[async_trait]
impl ScanLogRepository for RealtimeStoreRepo {
    async fn fetch_months(&self, year: i32) -> Result<Vec<u32>> {
        let keys = self
            .child_keys(&format!("logging_db/Scanning/{}", year))
            .await?;
        Ok(numeric_keys(keys))
    }

    async fn fetch_days(&self, year: i32, month: u32) -> Result<Vec<u32>> {
        let keys = self
            .child_keys(&format!("logging_db/Scanning/{}/{}", year, month))
            .await?;
        Ok(numeric_keys(keys))
    }

    async fn fetch_scan_events(&self, year: i32, month: u32, day: u32) -> Result<Option<ScanDay>> {
        self.get(&format!("logging_db/Scanning/{}/{}/{}", year, month, day))
            .await
    }

    async fn ping(&self) -> Result<()> {
        self.get_value("", true).await?;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for RealtimeStoreRepo {
    async fn fetch_orders(&self) -> Result<Option<Vec<Order>>> {
        let mapping: Option<BTreeMap<String, Order>> = self.get("orders_DB_V3").await?;
        Ok(mapping.map(|orders| orders.into_values().collect()))
    }

    async fn fetch_placement_parameters(&self) -> Result<Option<Vec<PlacementParameter>>> {
        let mapping: Option<BTreeMap<String, PlacementParameter>> =
            self.get("placement_db").await?;
        Ok(mapping.map(|params| params.into_values().collect()))
    }
}

#[async_trait]
impl SalesRepository for RealtimeStoreRepo {
    async fn fetch_sales_orders(&self) -> Result<Option<Vec<SalesOrder>>> {
        let mapping: Option<BTreeMap<String, SalesOrder>> = self.get("order_salles_db").await?;
        Ok(mapping.map(|orders| {
            orders
                .into_iter()
                .map(|(order_id, mut order)| {
                    order.order_id = order_id;
                    order
                })
                .collect()
        }))
    }
}

#[async_trait]
impl UserRepository for RealtimeStoreRepo {
    async fn list_telegram_users(&self) -> Result<Option<BTreeMap<String, TelegramUser>>> {
        self.get("tg_user_db").await
    }

    async fn save_telegram_user(&self, chat_id: &str, user: &TelegramUser) -> Result<()> {
        self.write(Method::PATCH, &format!("tg_user_db/{}", chat_id), user)
            .await
    }

    async fn delete_telegram_user(&self, chat_id: &str) -> Result<()> {
        self.delete(&format!("tg_user_db/{}", chat_id)).await
    }

    async fn list_accounts(&self) -> Result<Option<BTreeMap<String, AccountUser>>> {
        self.get("user_db").await
    }

    async fn save_account(&self, user_id: &str, account: &AccountUser) -> Result<()> {
        self.write(Method::PATCH, &format!("user_db/{}", user_id), account)
            .await
    }
}

#[async_trait]
impl SettingsRepository for RealtimeStoreRepo {
    async fn load_threshold_settings(&self) -> Result<Option<ThresholdSettings>> {
        self.get("scan_threshold_message_db").await
    }

    async fn save_threshold_settings(&self, settings: &ThresholdSettings) -> Result<()> {
        self.write(Method::PUT, "scan_threshold_message_db", settings)
            .await
    }
}
