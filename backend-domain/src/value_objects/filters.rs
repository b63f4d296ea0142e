// Filter selection value objects

use serde::{Deserialize, Serialize};

/// Filter over user ids or action names. The UI's `"all"` sentinel maps to
/// `All`; anything else is an exact-match predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActorFilter {
    #[default]
    All,
    Exact(String),
}

impl ActorFilter {
    /// Absent fields match only the sentinel, never a concrete value.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            ActorFilter::All => true,
            ActorFilter::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for ActorFilter {
    fn from(raw: &str) -> Self {
        if raw == "all" {
            ActorFilter::All
        } else {
            ActorFilter::Exact(raw.to_string())
        }
    }
}

impl From<Option<String>> for ActorFilter {
    fn from(raw: Option<String>) -> Self {
        match raw {
            None => ActorFilter::All,
            Some(value) => ActorFilter::from(value.as_str()),
        }
    }
}

/// Chart bucket width. Only widths that divide evenly into hour/minute
/// arithmetic are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeInterval {
    Min10,
    Min30,
    #[default]
    Min60,
}

impl TimeInterval {
    pub fn minutes(self) -> u32 {
        match self {
            TimeInterval::Min10 => 10,
            TimeInterval::Min30 => 30,
            TimeInterval::Min60 => 60,
        }
    }
}

impl TryFrom<u32> for TimeInterval {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(TimeInterval::Min10),
            30 => Ok(TimeInterval::Min30),
            60 => Ok(TimeInterval::Min60),
            other => Err(format!("unsupported time interval: {}", other)),
        }
    }
}

impl From<TimeInterval> for u32 {
    fn from(interval: TimeInterval) -> Self {
        interval.minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_matches_everything() {
        let filter = ActorFilter::from("all");
        assert!(filter.matches(Some("u1")));
        assert!(filter.matches(None));
    }

    #[test]
    fn exact_filter_requires_equality_and_presence() {
        let filter = ActorFilter::from("u1");
        assert!(filter.matches(Some("u1")));
        assert!(!filter.matches(Some("u2")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn interval_accepts_only_supported_widths() {
        assert_eq!(TimeInterval::try_from(10), Ok(TimeInterval::Min10));
        assert_eq!(TimeInterval::try_from(30), Ok(TimeInterval::Min30));
        assert_eq!(TimeInterval::try_from(60), Ok(TimeInterval::Min60));
        assert!(TimeInterval::try_from(15).is_err());
        assert!(TimeInterval::try_from(0).is_err());
    }
}
