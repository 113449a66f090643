use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Event, EventStatus, EventType};

/// Sentinel accepted by enum filters to disable them.
pub const ALL: &str = "all";

/// An enum filter as typed by a user: either everything, one exact value, or
/// a value that names nothing and therefore matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Choice<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: FromStr> Choice<T> {
    pub fn parse(s: &str) -> Self {
        if s == ALL {
            return Choice::All;
        }

        match s.parse() {
            Ok(value) => Choice::Only(value),
            Err(_) => Choice::Unrecognized(s.to_string()),
        }
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
            Choice::Unrecognized(_) => false,
        }
    }
}

/// Keeps events whose date lies strictly after or strictly before an instant.
///
/// Only the event date takes part, taken at midnight. Events with an
/// unparseable date never pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateWindow {
    After(NaiveDateTime),
    Before(NaiveDateTime),
}

impl DateWindow {
    pub fn after_day(day: NaiveDate) -> Self {
        DateWindow::After(day.and_time(NaiveTime::MIN))
    }

    pub fn before_day(day: NaiveDate) -> Self {
        DateWindow::Before(day.and_time(NaiveTime::MIN))
    }

    pub fn contains(&self, event: &Event) -> bool {
        let Some(date) = event.parsed_date() else {
            log::trace!("event {} has unparseable date `{}`", event.id, event.date);
            return false;
        };

        let instant = date.and_time(NaiveTime::MIN);
        match self {
            DateWindow::After(reference) => instant > *reference,
            DateWindow::Before(reference) => instant < *reference,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventFilter {
    pub search: String,
    pub status: Choice<EventStatus>,
    pub kind: Choice<EventType>,
    pub date_window: Option<DateWindow>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event)
            && self.status.matches(&event.status)
            && self.kind.matches(&event.kind)
            && self
                .date_window
                .map_or(true, |window| window.contains(event))
    }

    fn matches_search(&self, event: &Event) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        [&event.name, &event.location, &event.organizer]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Events passing `filter`, in input order.
pub fn filter_events<'a, I>(events: I, filter: &EventFilter) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| filter.matches(event))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SEED_EVENTS;

    fn ids(events: &[&Event]) -> Vec<u32> {
        events.iter().map(|e| e.id).collect()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::<EventStatus>::parse("all"), Choice::All);
        assert_eq!(
            Choice::<EventStatus>::parse("Planned"),
            Choice::Only(EventStatus::Planned)
        );
        assert_eq!(
            Choice::<EventStatus>::parse("Archived"),
            Choice::Unrecognized("Archived".into())
        );
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let result = filter_events(SEED_EVENTS.iter(), &EventFilter::default());
        assert_eq!(result.len(), SEED_EVENTS.len());
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let by_name = EventFilter {
            search: "WORKSHOP".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_events(SEED_EVENTS.iter(), &by_name)), vec![4, 6, 10, 14]);

        let by_location = EventFilter {
            search: "boardroom".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_events(SEED_EVENTS.iter(), &by_location)), vec![3]);

        let by_organizer = EventFilter {
            search: "garcia".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_events(SEED_EVENTS.iter(), &by_organizer)), vec![14]);
    }

    #[test]
    fn test_search_ignores_description() {
        let filter = EventFilter {
            search: "scrum".into(),
            ..Default::default()
        };
        assert!(filter_events(SEED_EVENTS.iter(), &filter).is_empty());
    }

    #[test]
    fn test_unrecognized_choice_matches_nothing() {
        let filter = EventFilter {
            kind: Choice::parse("Webinar"),
            ..Default::default()
        };
        assert!(filter_events(SEED_EVENTS.iter(), &filter).is_empty());
    }

    #[test]
    fn test_predicates_are_combined() {
        let filter = EventFilter {
            search: "meeting".into(),
            status: Choice::Only(EventStatus::Completed),
            kind: Choice::Only(EventType::Meeting),
            date_window: Some(DateWindow::after_day(day(2026, 1, 1))),
        };
        assert_eq!(ids(&filter_events(SEED_EVENTS.iter(), &filter)), vec![3, 8]);
    }

    #[test]
    fn test_date_window_is_strict() {
        let event = SEED_EVENTS.iter().find(|e| e.id == 3).unwrap();
        assert!(!DateWindow::after_day(day(2026, 1, 20)).contains(event));
        assert!(DateWindow::after_day(day(2026, 1, 19)).contains(event));
        assert!(!DateWindow::before_day(day(2026, 1, 20)).contains(event));
        assert!(DateWindow::before_day(day(2026, 1, 21)).contains(event));
    }

    #[test]
    fn test_unparseable_date_fails_every_window() {
        let mut event = SEED_EVENTS[0].clone();
        event.date = "next tuesday".into();

        assert!(!DateWindow::after_day(NaiveDate::MIN).contains(&event));
        assert!(!DateWindow::before_day(NaiveDate::MAX).contains(&event));

        let events = vec![event];
        let without_window = EventFilter::default();
        assert_eq!(filter_events(&events, &without_window).len(), 1);
    }
}
