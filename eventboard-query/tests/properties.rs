use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use eventboard_query::{
    aggregate_by, filter_events, paginate, sort_events, Choice, DateWindow, Event, EventFilter,
    EventQuery, EventStatus, EventType, MonthLabel, QueryError, SortDirection, SortKey, SEED_EVENTS,
};

fn filters() -> Vec<EventFilter> {
    let after = DateWindow::after_day(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    let before = DateWindow::before_day(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

    vec![
        EventFilter::default(),
        EventFilter {
            search: "center".into(),
            ..Default::default()
        },
        EventFilter {
            status: Choice::Only(EventStatus::Planned),
            date_window: Some(after),
            ..Default::default()
        },
        EventFilter {
            kind: Choice::Only(EventType::Workshop),
            date_window: Some(before),
            ..Default::default()
        },
        EventFilter {
            status: Choice::parse("Deleted"),
            ..Default::default()
        },
    ]
}

/// Seed events plus one whose date cannot be parsed.
fn events_with_broken_date() -> Vec<Event> {
    let mut events = SEED_EVENTS.clone();
    let mut broken = events[0].clone();
    broken.id = 99;
    broken.date = "2026-13-01".into();
    events.insert(4, broken);
    events
}

fn is_subsequence(needle: &[&Event], haystack: &[Event]) -> bool {
    let mut rest = haystack.iter();
    needle
        .iter()
        .all(|wanted| rest.any(|candidate| candidate.id == wanted.id))
}

#[test]
fn filter_is_idempotent() {
    let events = events_with_broken_date();
    for filter in filters() {
        let once = filter_events(&events, &filter);
        let twice = filter_events(once.iter().copied(), &filter);
        assert_eq!(once, twice);
    }
}

#[test]
fn filter_preserves_order() {
    let events = events_with_broken_date();
    for filter in filters() {
        let result = filter_events(&events, &filter);
        assert!(is_subsequence(&result, &events), "{filter:?}");
    }
}

#[test]
fn broken_dates_only_drop_out_of_date_views() {
    let events = events_with_broken_date();

    let listed = filter_events(&events, &EventFilter::default());
    assert!(listed.iter().any(|e| e.id == 99));

    for filter in filters().into_iter().filter(|f| f.date_window.is_some()) {
        let dated = filter_events(&events, &filter);
        assert!(dated.iter().all(|e| e.id != 99));
    }
}

#[test]
fn pages_concatenate_to_the_whole() {
    let events = events_with_broken_date();
    let sorted = sort_events(&events, SortKey::Date, SortDirection::Descending);

    for page_size in 1..=17 {
        let total_pages = paginate(&sorted, 1, page_size).unwrap().total_pages;
        let rejoined = (1..=total_pages)
            .flat_map(|page| paginate(&sorted, page, page_size).unwrap().items)
            .collect::<Vec<_>>();
        assert_eq!(rejoined, sorted, "page size {page_size}");
    }
}

#[test]
fn aggregation_conserves_counts() {
    let events = events_with_broken_date();

    let by_status = aggregate_by(&events, |e| Some(e.status));
    assert_eq!(by_status.values().sum::<usize>(), events.len());

    let by_month = aggregate_by(&events, |e| e.parsed_date().map(MonthLabel::of));
    assert_eq!(by_month.values().sum::<usize>(), events.len() - 1);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let mut twins = SEED_EVENTS.clone();
    for event in twins.iter_mut() {
        let month = if event.id % 2 == 0 { "04" } else { "03" };
        event.date = format!("2026-{month}-01");
        event.time = "09:00".into();
    }

    let resorted = sort_events(&twins, SortKey::Date, SortDirection::Descending);
    let ids = resorted.iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15]
    );
}

#[test]
fn bad_arguments_fail_up_front() {
    assert!(matches!(
        "venue".parse::<SortKey>(),
        Err(QueryError::InvalidArgument(_))
    ));

    let query = EventQuery {
        page_size: 0,
        ..Default::default()
    };
    assert!(matches!(
        query.run(&SEED_EVENTS),
        Err(QueryError::InvalidArgument(_))
    ));
}
