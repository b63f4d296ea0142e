// Scan event entity
// One logged scan/action occurrence, keyed by logId in the store

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A single day of raw events exactly as stored: `logId -> event`.
/// The leading digits of a logId encode an `HHMMSS` wall-clock fragment.
pub type ScanDay = BTreeMap<String, ScanEvent>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, alias = "actionName")]
    pub screen: Option<String>,
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
}

// Instrumented devices log `success` either as a JSON bool or as the
// strings "true"/"false". Both forms collapse to a real bool at this
// boundary so the pipeline never re-checks the duck-typed variants.
fn success_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(value) => Ok(value == "true"),
    }
}
