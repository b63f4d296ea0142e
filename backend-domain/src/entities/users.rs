// Telegram-bot-linked users and dashboard accounts

use serde::{Deserialize, Serialize};

// Writes to the store are merge-patches: a `null` field would delete the
// stored value, so absent options are skipped instead of serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramUser {
    #[serde(default)]
    pub chat_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_to_list: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_threshold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_error_message: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_id: Option<i64>,
}

impl TelegramUser {
    /// Fills the defaults the bot side expects before a merge write.
    pub fn normalized(mut self, chat_id: &str) -> Self {
        self.chat_id = chat_id.to_string();
        if self.name.as_deref().map_or(true, str::is_empty) {
            self.name = Some("n/a".to_string());
        }
        if self.text.is_none() {
            self.text = Some(String::new());
        }
        self.added_to_list.get_or_insert(true);
        self.scan_threshold.get_or_insert(false);
        self.send_error_message.get_or_insert(false);
        self.update_id.get_or_insert(0);
        self
    }
}

/// Dashboard account record. The store schema drifted over time, so unknown
/// fields are carried through `extra` and written back untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    /// Packed ARGB accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_scan: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_error_message: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSettings {
    #[serde(default)]
    pub threshold: u64,
    #[serde(default)]
    pub message: String,
    /// `DD-MM-YYYY HH:MM:SS`, stamped on save.
    #[serde(default)]
    pub update_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_fills_bot_defaults() {
        let user = TelegramUser::default().normalized("42");
        assert_eq!(user.chat_id, "42");
        assert_eq!(user.name.as_deref(), Some("n/a"));
        assert_eq!(user.text.as_deref(), Some(""));
        assert_eq!(user.added_to_list, Some(true));
        assert_eq!(user.scan_threshold, Some(false));
        assert_eq!(user.send_error_message, Some(false));
        assert_eq!(user.update_id, Some(0));
    }

    #[test]
    fn normalized_keeps_explicit_values() {
        let user = TelegramUser {
            name: Some("Olena".to_string()),
            scan_threshold: Some(true),
            update_id: Some(7),
            ..TelegramUser::default()
        }
        .normalized("42");
        assert_eq!(user.name.as_deref(), Some("Olena"));
        assert_eq!(user.scan_threshold, Some(true));
        assert_eq!(user.update_id, Some(7));
    }

    #[test]
    fn account_round_trips_unknown_fields() {
        let raw = r#"{"name":"Packer","chatId":"42","legacyFlag":true}"#;
        let account: AccountUser = serde_json::from_str(raw).expect("account");
        assert_eq!(account.extra.get("legacyFlag"), Some(&serde_json::Value::Bool(true)));
        let back = serde_json::to_value(&account).expect("serialize");
        assert_eq!(back["legacyFlag"], serde_json::Value::Bool(true));
    }
}
