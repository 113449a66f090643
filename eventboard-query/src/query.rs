use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::page::check_page_size;
use crate::{
    filter_events, paginate, sort_events, Choice, DateWindow, Event, EventFilter, EventStatus,
    Page, QueryResult, SortDirection, SortKey, DEFAULT_PAGE_SIZE,
};

/// Everything a list view needs to describe what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventQuery {
    pub filter: EventFilter,
    pub sort: Option<(SortKey, SortDirection)>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            filter: EventFilter::default(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EventQuery {
    /// Planned events after `today`, soonest first.
    pub fn upcoming(today: NaiveDate) -> Self {
        Self {
            filter: EventFilter {
                status: Choice::Only(EventStatus::Planned),
                date_window: Some(DateWindow::after_day(today)),
                ..Default::default()
            },
            sort: Some((SortKey::Date, SortDirection::Ascending)),
            ..Default::default()
        }
    }

    pub fn run<'a>(&self, events: &'a [Event]) -> QueryResult<Page<&'a Event>> {
        check_page_size(self.page_size)?;

        let filtered = filter_events(events, &self.filter);
        let ordered = match self.sort {
            Some((key, direction)) => sort_events(filtered, key, direction),
            None => filtered,
        };

        let page = paginate(&ordered, self.page, self.page_size)?;
        log::debug!(
            "query matched {} of {} events, page {}/{}",
            page.total,
            events.len(),
            page.page,
            page.total_pages
        );

        Ok(page)
    }
}
