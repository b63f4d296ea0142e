use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{RuntimeConfig, StoreConfig};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub store_base_url: String,
    pub store_prefix: String,
    pub store_auth_token: Option<String>,
    pub upload_api_url: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub settings_poll_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            store_base_url: "http://127.0.0.1:9000".to_string(),
            store_prefix: "release".to_string(),
            store_auth_token: None,
            upload_api_url: "http://127.0.0.1:3001".to_string(),
            max_body_bytes: 16 * 1024 * 1024,
            request_timeout_seconds: 15,
            settings_poll_seconds: 30,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("DEPOT_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(auth_token) = &self.store_auth_token {
            if auth_token.trim().is_empty() {
                self.store_auth_token = None;
            }
        }
        self.store_base_url = self.store_base_url.trim_end_matches('/').to_string();
        self.upload_api_url = self.upload_api_url.trim_end_matches('/').to_string();
        self.store_prefix = self.store_prefix.trim_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.store_base_url.trim().is_empty() {
            return Err(anyhow!("store_base_url must not be empty"));
        }
        if self.store_prefix.is_empty() {
            return Err(anyhow!("store_prefix must not be empty"));
        }
        if self.upload_api_url.trim().is_empty() {
            return Err(anyhow!("upload_api_url must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.settings_poll_seconds == 0 {
            return Err(anyhow!("settings_poll_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            upload_api_url: self.upload_api_url.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            settings_poll_seconds: self.settings_poll_seconds,
        }
    }

    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            base_url: self.store_base_url.clone(),
            prefix: self.store_prefix.clone(),
            auth_token: self.store_auth_token.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("DEPOT_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("DEPOT_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("DEPOT_STORE_BASE_URL") {
            self.store_base_url = value;
        }
        if let Ok(value) = env::var("DEPOT_STORE_PREFIX") {
            self.store_prefix = value;
        }
        if let Ok(value) = env::var("DEPOT_STORE_AUTH_TOKEN") {
            self.store_auth_token = Some(value);
        }
        if let Ok(value) = env::var("DEPOT_UPLOAD_API_URL") {
            self.upload_api_url = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blank_tokens_and_trailing_slashes() {
        let mut config = AppConfig {
            api_token: Some("  ".to_string()),
            store_auth_token: Some("".to_string()),
            store_base_url: "https://store.example/".to_string(),
            store_prefix: "/release/".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.api_token.is_none());
        assert!(config.store_auth_token.is_none());
        assert_eq!(config.store_base_url, "https://store.example");
        assert_eq!(config.store_prefix, "release");
    }

    #[test]
    fn validate_rejects_a_bad_bind_addr() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_an_empty_prefix() {
        let mut config = AppConfig {
            store_prefix: "/".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.validate().is_err());
    }
}
