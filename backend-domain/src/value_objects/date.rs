// Calendar scope of a stored day of scan data

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DataDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// Months (and, once a month is fixed, days) that hold at least one stored
/// day of scan data. Most recent first; empty lists are a valid "no data"
/// answer, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailableDates {
    pub year: i32,
    pub months: Vec<u32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub days: Vec<u32>,
}
