// Series assembler: one immutable view model per recompute

use std::collections::BTreeSet;

use crate::entities::{ScanDay, ScanEvent, ScanSeries};
use crate::services::{bucketizer, filter};
use crate::value_objects::{ActorFilter, DataDate, TimeInterval};

/// Full synchronous recompute over an already-fetched day of raw events.
/// The distinct user/action lists feed the filter dropdowns and always come
/// from the unfiltered set; the bucket series and its reductions come from
/// the filtered one.
pub fn assemble_series(
    date: DataDate,
    events: &ScanDay,
    user: &ActorFilter,
    action: &ActorFilter,
    interval: TimeInterval,
) -> ScanSeries {
    let users = distinct(events, |event| event.user_id.as_deref());
    let actions = distinct(events, |event| event.screen.as_deref());

    let entries = filter::filter_events(events, user, action);
    let series = bucketizer::build_series(&entries, interval);

    let success_count = series.buckets.iter().map(|b| b.success_count).sum();
    let fail_count = series.buckets.iter().map(|b| b.fail_count).sum();
    let total = series.buckets.iter().map(|b| b.total).sum();

    ScanSeries {
        date: Some(date),
        users,
        actions,
        buckets: series.buckets,
        success_count,
        fail_count,
        total,
        dropped_log_ids: series.dropped,
    }
}

fn distinct<'a, F>(events: &'a ScanDay, field: F) -> Vec<String>
where
    F: Fn(&'a ScanEvent) -> Option<&'a str>,
{
    let values: BTreeSet<&str> = events.values().filter_map(field).collect();
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(user_id: &str, screen: &str, success: bool) -> ScanEvent {
        ScanEvent {
            user_id: Some(user_id.to_string()),
            screen: Some(screen.to_string()),
            success,
        }
    }

    fn date() -> DataDate {
        DataDate::new(2026, 7, 15)
    }

    #[test]
    fn reductions_sum_over_all_buckets() {
        let events = ScanDay::from([
            ("090000".to_string(), event("u1", "Pack", true)),
            ("093000".to_string(), event("u2", "Pack", false)),
            ("100000".to_string(), event("u1", "Ship", true)),
        ]);
        let series = assemble_series(
            date(),
            &events,
            &ActorFilter::All,
            &ActorFilter::All,
            TimeInterval::Min30,
        );
        assert_eq!(series.success_count, 2);
        assert_eq!(series.fail_count, 1);
        assert_eq!(series.total, 3);
        assert_eq!(series.users, vec!["u1", "u2"]);
        assert_eq!(series.actions, vec!["Pack", "Ship"]);
    }

    #[test]
    fn dropdown_lists_survive_a_narrow_filter() {
        let events = ScanDay::from([
            ("090000".to_string(), event("u1", "Pack", true)),
            ("100000".to_string(), event("u2", "Ship", true)),
        ]);
        let series = assemble_series(
            date(),
            &events,
            &ActorFilter::from("u1"),
            &ActorFilter::All,
            TimeInterval::Min60,
        );
        assert_eq!(series.total, 1);
        assert_eq!(series.users, vec!["u1", "u2"]);
    }

    #[test]
    fn empty_filtered_set_yields_all_zero_reductions() {
        let events = ScanDay::from([("090000".to_string(), event("u1", "Pack", true))]);
        let series = assemble_series(
            date(),
            &events,
            &ActorFilter::from("nobody"),
            &ActorFilter::All,
            TimeInterval::Min60,
        );
        assert!(series.buckets.is_empty());
        assert_eq!(series.success_count, 0);
        assert_eq!(series.fail_count, 0);
        assert_eq!(series.total, 0);
    }

    #[test]
    fn malformed_ids_surface_only_in_diagnostics() {
        let events = ScanDay::from([
            ("090000".to_string(), event("u1", "Pack", true)),
            ("garbage".to_string(), event("u1", "Pack", true)),
        ]);
        let series = assemble_series(
            date(),
            &events,
            &ActorFilter::All,
            &ActorFilter::All,
            TimeInterval::Min60,
        );
        assert_eq!(series.total, 1);
        assert_eq!(series.dropped_log_ids, 1);
    }
}
