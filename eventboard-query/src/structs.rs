use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{QueryError, QueryResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventType {
    Seminar,
    Meeting,
    Workshop,
    Conference,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Seminar,
        EventType::Meeting,
        EventType::Workshop,
        EventType::Conference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Seminar => "Seminar",
            EventType::Meeting => "Meeting",
            EventType::Workshop => "Workshop",
            EventType::Conference => "Conference",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match EventType::ALL.into_iter().find(|kind| kind.as_str() == s) {
            Some(kind) => Ok(kind),
            None => QueryError::invalid_argument(format!("unknown event type `{s}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventStatus {
    Planned,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Planned,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Planned => "Planned",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        match EventStatus::ALL.into_iter().find(|status| status.as_str() == s) {
            Some(status) => Ok(status),
            None => QueryError::invalid_argument(format!("unknown event status `{s}`")),
        }
    }
}

/// A single event record.
///
/// Dates and times are kept in their stored string form (`YYYY-MM-DD` and
/// `HH:MM`) and parsed on demand, so a malformed record can still be listed
/// even though it never takes part in date-based views.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Event {
    pub id: u32,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: EventType,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer: String,
    pub status: EventStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub created_date: String,
}

impl Event {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn parsed_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()
    }

    pub fn parsed_created_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.created_date, DATE_FORMAT).ok()
    }

    /// Date and time combined. A missing or malformed time falls back to
    /// midnight; a malformed date yields `None`.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = self.parsed_date()?;
        Some(date.and_time(self.parsed_time().unwrap_or(NaiveTime::MIN)))
    }

    /// Whole days from `today` until the event date, negative for past events.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.parsed_date()
            .map(|date| date.signed_duration_since(today).num_days())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Urgency {
    Imminent,
    Soon,
    Later,
}

impl Urgency {
    pub fn from_days(days: i64) -> Self {
        if days <= 7 {
            Urgency::Imminent
        } else if days <= 30 {
            Urgency::Soon
        } else {
            Urgency::Later
        }
    }
}
