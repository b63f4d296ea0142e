// Filter stage: narrows a day's raw events by user and action

use crate::entities::{ScanDay, ScanEvent};
use crate::value_objects::ActorFilter;

/// Pure filter over the raw event map. Matching is exact string equality;
/// the `"all"` sentinel bypasses the respective predicate.
pub fn filter_events<'a>(
    events: &'a ScanDay,
    user: &ActorFilter,
    action: &ActorFilter,
) -> Vec<(&'a str, &'a ScanEvent)> {
    events
        .iter()
        .filter(|(_, event)| user.matches(event.user_id.as_deref()))
        .filter(|(_, event)| action.matches(event.screen.as_deref()))
        .map(|(log_id, event)| (log_id.as_str(), event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(user_id: Option<&str>, screen: Option<&str>) -> ScanEvent {
        ScanEvent {
            user_id: user_id.map(str::to_string),
            screen: screen.map(str::to_string),
            success: true,
        }
    }

    fn day() -> ScanDay {
        ScanDay::from([
            ("090000".to_string(), event(Some("u1"), Some("Pack"))),
            ("091500".to_string(), event(Some("u2"), Some("Pack"))),
            ("093000".to_string(), event(Some("u1"), Some("Ship"))),
            ("094500".to_string(), event(None, None)),
        ])
    }

    #[test]
    fn all_sentinels_keep_the_whole_set() {
        let events = day();
        let kept = filter_events(&events, &ActorFilter::All, &ActorFilter::All);
        assert_eq!(kept.len(), events.len());
    }

    #[test]
    fn user_and_action_predicates_compose() {
        let events = day();
        let kept = filter_events(
            &events,
            &ActorFilter::from("u1"),
            &ActorFilter::from("Pack"),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, "090000");
    }

    #[test]
    fn absent_fields_never_match_a_concrete_value() {
        let events = day();
        let kept = filter_events(&events, &ActorFilter::from("u1"), &ActorFilter::All);
        assert!(kept.iter().all(|(log_id, _)| *log_id != "094500"));
    }
}
