// Runtime configuration passed across layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub upload_api_url: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub settings_poll_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    /// Environment-selecting path segment prepended to every store path.
    pub prefix: String,
    pub auth_token: Option<String>,
}
