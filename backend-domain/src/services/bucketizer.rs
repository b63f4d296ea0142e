// Time bucketizer: the algorithmic core of the scan-series chart.
//
// The leading digits of a logId encode an HHMMSS wall-clock fragment.
// Events bucket by flooring their minute-of-day to the interval width, and
// buckets are generated densely from the first to the last active interval
// so the chart has no x-axis gaps between them.

use std::collections::BTreeMap;

use crate::entities::{ScanEvent, TimeBucket};
use crate::value_objects::TimeInterval;

/// Minute-of-day from a logId: zero-pad to 6 chars, chars 0..2 are hours,
/// 2..4 are minutes. Malformed ids yield `None`.
pub fn minute_of_day(log_id: &str) -> Option<u32> {
    let padded = format!("{:0>6}", log_id);
    let hours: u32 = padded.get(0..2)?.parse().ok()?;
    let minutes: u32 = padded.get(2..4)?.parse().ok()?;
    Some(hours * 60 + minutes)
}

fn clock_label(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

#[derive(Debug, Default)]
pub struct BucketedSeries {
    /// Ascending by time; dense between the first and last active interval.
    pub buckets: Vec<TimeBucket>,
    /// Events excluded because their logId had no parseable timestamp.
    pub dropped: u64,
}

pub fn build_series(entries: &[(&str, &ScanEvent)], interval: TimeInterval) -> BucketedSeries {
    let width = interval.minutes();

    let mut dropped = 0u64;
    let mut stamped: Vec<(u32, &ScanEvent)> = Vec::with_capacity(entries.len());
    for (log_id, event) in entries {
        match minute_of_day(log_id) {
            Some(minute) => stamped.push((minute, *event)),
            None => dropped += 1,
        }
    }

    let minutes = stamped.iter().map(|(minute, _)| *minute);
    let (Some(min), Some(max)) = (minutes.clone().min(), minutes.max()) else {
        return BucketedSeries {
            buckets: Vec::new(),
            dropped,
        };
    };

    // Dense zero-initialized buckets; min/max bound the range, so every
    // stamped event lands in a pre-generated slot.
    let start = min / width * width;
    let end = max / width * width;
    let mut counts: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
    let mut bucket_start = start;
    while bucket_start <= end {
        counts.insert(bucket_start, (0, 0));
        bucket_start += width;
    }

    for (minute, event) in stamped {
        if let Some((success_count, fail_count)) = counts.get_mut(&(minute / width * width)) {
            if event.success {
                *success_count += 1;
            } else {
                *fail_count += 1;
            }
        }
    }

    let buckets = counts
        .into_iter()
        .map(|(minute, (success_count, fail_count))| TimeBucket {
            time: clock_label(minute),
            success_count,
            fail_count,
            total: success_count + fail_count,
        })
        .collect();

    BucketedSeries { buckets, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> ScanEvent {
        ScanEvent {
            user_id: None,
            screen: None,
            success: true,
        }
    }

    fn failure() -> ScanEvent {
        ScanEvent {
            success: false,
            ..success()
        }
    }

    #[test]
    fn minute_of_day_parses_padded_fragments() {
        assert_eq!(minute_of_day("090000"), Some(9 * 60));
        assert_eq!(minute_of_day("095912"), Some(9 * 60 + 59));
        // Short ids are left-padded to six characters.
        assert_eq!(minute_of_day("130"), Some(1));
        assert_eq!(minute_of_day("ab0000"), None);
        assert_eq!(minute_of_day("09xx00"), None);
    }

    #[test]
    fn thirty_minute_buckets_floor_and_fill() {
        let ok = success();
        let fail = failure();
        let entries = vec![
            ("090000", &ok),
            ("093000", &fail),
            ("095900", &ok),
        ];
        let series = build_series(&entries, TimeInterval::Min30);
        assert_eq!(series.buckets.len(), 2);
        assert_eq!(
            series.buckets[0],
            TimeBucket {
                time: "09:00".to_string(),
                success_count: 1,
                fail_count: 1,
                total: 2,
            }
        );
        // 09:59 floors into the 09:30 bucket.
        assert_eq!(
            series.buckets[1],
            TimeBucket {
                time: "09:30".to_string(),
                success_count: 1,
                fail_count: 0,
                total: 1,
            }
        );
    }

    #[test]
    fn gaps_between_active_intervals_materialize_as_zero_buckets() {
        let ok = success();
        let entries = vec![("080000", &ok), ("110000", &ok)];
        let series = build_series(&entries, TimeInterval::Min60);
        let labels: Vec<&str> = series.buckets.iter().map(|b| b.time.as_str()).collect();
        assert_eq!(labels, vec!["08:00", "09:00", "10:00", "11:00"]);
        assert_eq!(series.buckets[1].total, 0);
        assert_eq!(series.buckets[2].total, 0);
    }

    #[test]
    fn bucket_count_matches_span_over_width() {
        let ok = success();
        for interval in [TimeInterval::Min10, TimeInterval::Min30, TimeInterval::Min60] {
            let entries = vec![("091100", &ok), ("104500", &ok)];
            let series = build_series(&entries, interval);
            let width = interval.minutes();
            let start = (9 * 60 + 11) / width * width;
            let end = (10 * 60 + 45) / width * width;
            assert_eq!(series.buckets.len() as u32, (end - start) / width + 1);
        }
    }

    #[test]
    fn single_event_yields_exactly_one_bucket() {
        let ok = success();
        let entries = vec![("123456", &ok)];
        let series = build_series(&entries, TimeInterval::Min10);
        assert_eq!(series.buckets.len(), 1);
        assert_eq!(series.buckets[0].time, "12:30");
        assert_eq!(series.buckets[0].total, 1);
    }

    #[test]
    fn malformed_ids_drop_without_a_bucket() {
        let ok = success();
        let entries = vec![("090000", &ok), ("broken", &ok)];
        let series = build_series(&entries, TimeInterval::Min60);
        assert_eq!(series.dropped, 1);
        let counted: u64 = series.buckets.iter().map(|b| b.total).sum();
        assert_eq!(counted, 1);
    }

    #[test]
    fn empty_input_is_an_empty_series_not_an_error() {
        let series = build_series(&[], TimeInterval::Min30);
        assert!(series.buckets.is_empty());
        assert_eq!(series.dropped, 0);
    }

    #[test]
    fn totals_equal_success_plus_fail_in_every_bucket() {
        let ok = success();
        let fail = failure();
        let entries = vec![
            ("100000", &ok),
            ("100100", &fail),
            ("101000", &fail),
            ("104500", &ok),
        ];
        let series = build_series(&entries, TimeInterval::Min10);
        for bucket in &series.buckets {
            assert_eq!(bucket.total, bucket.success_count + bucket.fail_count);
        }
        let counted: u64 = series.buckets.iter().map(|b| b.total).sum();
        assert_eq!(counted, entries.len() as u64);
    }

    #[test]
    fn rerunning_produces_an_identical_series() {
        let ok = success();
        let fail = failure();
        let entries = vec![("090000", &ok), ("093000", &fail)];
        let first = build_series(&entries, TimeInterval::Min30);
        let second = build_series(&entries, TimeInterval::Min30);
        assert_eq!(first.buckets, second.buckets);
        assert_eq!(first.dropped, second.dropped);
    }
}
