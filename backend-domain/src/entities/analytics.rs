// Scan-series view model
// Produced wholesale by the assembler on every filter change

use serde::{Deserialize, Serialize};

use crate::value_objects::DataDate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBucket {
    /// `HH:MM` start of the interval the bucket covers.
    pub time: String,
    pub success_count: u64,
    pub fail_count: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSeries {
    /// Resolved date the series covers; `None` when the store holds nothing
    /// for the requested scope.
    pub date: Option<DataDate>,
    /// Distinct user ids seen in the unfiltered day, for filter dropdowns.
    pub users: Vec<String>,
    /// Distinct action/screen names seen in the unfiltered day.
    pub actions: Vec<String>,
    pub buckets: Vec<TimeBucket>,
    pub success_count: u64,
    pub fail_count: u64,
    pub total: u64,
    /// Events excluded from bucketing because their logId had no parseable
    /// timestamp fragment. Aggregates above never include them.
    pub dropped_log_ids: u64,
}

impl ScanSeries {
    pub fn empty(date: Option<DataDate>) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }
}
