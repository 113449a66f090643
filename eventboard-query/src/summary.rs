use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    count_by_month, count_each, filter_events, top_n_by_date, Choice, DateWindow, Event,
    EventFilter, EventStatus, EventType, MonthLabel, TopOrder,
};

/// Rows shown in each quick-glance table.
pub const QUICK_LIST_LEN: usize = 5;

pub const FIRST_CHART_MONTH: MonthLabel = MonthLabel {
    year: 2025,
    month: 12,
};
pub const CHART_MONTHS: usize = 6;

/// The months the dashboard charts when no range is given: Dec 2025 to May 2026.
pub fn default_months() -> Vec<MonthLabel> {
    FIRST_CHART_MONTH.run(CHART_MONTHS)
}

/// Figures behind the dashboard: KPI cards, the three charts and the two
/// quick-glance tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DashboardSummary<'a> {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub completed_events: usize,
    pub events_this_month: usize,
    pub by_month: Vec<(MonthLabel, usize)>,
    pub by_type: Vec<(EventType, usize)>,
    pub by_status: Vec<(EventStatus, usize)>,
    pub next_upcoming: Vec<&'a Event>,
    pub recently_added: Vec<&'a Event>,
}

impl<'a> DashboardSummary<'a> {
    pub fn compute(events: &'a [Event], today: NaiveDate, months: &[MonthLabel]) -> Self {
        let upcoming = EventFilter {
            status: Choice::Only(EventStatus::Planned),
            date_window: Some(DateWindow::after_day(today)),
            ..Default::default()
        };

        let this_month = MonthLabel::of(today);
        let events_this_month = events
            .iter()
            .filter(|event| event.parsed_date().map(MonthLabel::of) == Some(this_month))
            .count();

        let summary = Self {
            total_events: events.len(),
            upcoming_events: filter_events(events, &upcoming).len(),
            completed_events: events
                .iter()
                .filter(|event| event.status == EventStatus::Completed)
                .count(),
            events_this_month,
            by_month: count_by_month(events, months),
            by_type: count_each(events, &EventType::ALL, |event| Some(event.kind)),
            by_status: count_each(events, &EventStatus::ALL, |event| Some(event.status)),
            next_upcoming: top_n_by_date(events, QUICK_LIST_LEN, TopOrder::Upcoming { today }),
            recently_added: top_n_by_date(events, QUICK_LIST_LEN, TopOrder::RecentlyAdded),
        };

        log::debug!(
            "dashboard for {today}: {} total, {} upcoming, {} this month",
            summary.total_events,
            summary.upcoming_events,
            summary.events_this_month
        );

        summary
    }
}
