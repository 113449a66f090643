use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DateWindow, Event, EventStatus, QueryError, QueryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKey {
    /// Event date and time.
    Date,
    /// The date the record was entered.
    Created,
    Name,
    Id,
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match s {
            "date" => Ok(SortKey::Date),
            "created" | "createdDate" => Ok(SortKey::Created),
            "name" => Ok(SortKey::Name),
            "id" => Ok(SortKey::Id),
            _ => QueryError::invalid_argument(format!("unknown sort key `{s}`")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Date => "date",
            SortKey::Created => "created",
            SortKey::Name => "name",
            SortKey::Id => "id",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => QueryError::invalid_argument(format!("unknown sort direction `{s}`")),
        }
    }
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Orders present keys by `direction` and puts missing keys last either way.
fn compare_present<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &Event, b: &Event, key: SortKey, direction: SortDirection) -> Ordering {
    match key {
        SortKey::Date => compare_present(a.starts_at(), b.starts_at(), direction),
        SortKey::Created => {
            compare_present(a.parsed_created_date(), b.parsed_created_date(), direction)
        }
        SortKey::Name => direction.apply(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Id => direction.apply(a.id.cmp(&b.id)),
    }
}

/// Stable sort: events with equal keys keep their input order. Events whose
/// date cannot be parsed go to the end when sorting by a date key.
pub fn sort_events<'a, I>(events: I, key: SortKey, direction: SortDirection) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut events = events.into_iter().collect::<Vec<_>>();
    events.sort_by(|a, b| compare(a, b, key, direction));
    events
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopOrder {
    /// Planned events dated after `today`, soonest first.
    Upcoming { today: NaiveDate },
    /// Most recently entered first.
    RecentlyAdded,
}

/// The first `n` events under `order`.
pub fn top_n_by_date<'a, I>(events: I, n: usize, order: TopOrder) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted = match order {
        TopOrder::Upcoming { today } => {
            let window = DateWindow::after_day(today);
            let upcoming = events
                .into_iter()
                .filter(|event| event.status == EventStatus::Planned && window.contains(event));
            sort_events(upcoming, SortKey::Date, SortDirection::Ascending)
        }
        TopOrder::RecentlyAdded => sort_events(events, SortKey::Created, SortDirection::Descending),
    };

    sorted.truncate(n);
    sorted
}
