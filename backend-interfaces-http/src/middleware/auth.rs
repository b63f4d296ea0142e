use axum::http::HeaderMap;

use backend_domain::RuntimeConfig;

/// With no token configured the API is open; with one, every route wants a
/// matching bearer header.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config(token: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: token.map(str::to_string),
            upload_api_url: String::new(),
            max_body_bytes: 1,
            request_timeout_seconds: 1,
            settings_poll_seconds: 1,
        }
    }

    #[test]
    fn open_when_no_token_is_configured() {
        assert!(authorize(&config(None), &HeaderMap::new()));
    }

    #[test]
    fn requires_a_matching_bearer_token() {
        let cfg = config(Some("secret"));
        let mut headers = HeaderMap::new();
        assert!(!authorize(&cfg, &headers));

        headers.insert("Authorization", HeaderValue::from_static("Bearer secret"));
        assert!(authorize(&cfg, &headers));

        headers.insert("Authorization", HeaderValue::from_static("Bearer wrong"));
        assert!(!authorize(&cfg, &headers));
    }
}
