use std::fmt;

use chrono::{NaiveDate, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Event, EventStatus, EventType, DATE_FORMAT, TIME_FORMAT};

/// Raw form input for a new or edited event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EventDraft {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer: String,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Name,
    Type,
    Date,
    Time,
    Location,
    Organizer,
    Status,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Type => "type",
            Field::Date => "date",
            Field::Time => "time",
            Field::Location => "location",
            Field::Organizer => "organizer",
            Field::Status => "status",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewEvent {
    pub name: String,
    pub kind: EventType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub status: EventStatus,
    pub description: String,
}

impl NewEvent {
    pub fn into_event(self, id: u32, created: NaiveDate) -> Event {
        Event {
            id,
            name: self.name,
            kind: self.kind,
            date: self.date.format(DATE_FORMAT).to_string(),
            time: self.time.format(TIME_FORMAT).to_string(),
            location: self.location,
            organizer: self.organizer,
            status: self.status,
            description: self.description,
            created_date: created.format(DATE_FORMAT).to_string(),
        }
    }
}

impl EventDraft {
    /// Checks every field and reports all problems at once, in form order.
    pub fn validate(&self) -> Result<NewEvent, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(Field::Name, "Event name is required"));
        }

        let kind = required(
            &self.kind,
            Field::Type,
            "Event type is required",
            "Event type is invalid",
            |s| s.parse::<EventType>().ok(),
            &mut errors,
        );

        let date = required(
            &self.date,
            Field::Date,
            "Event date is required",
            "Event date is invalid",
            |s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
            &mut errors,
        );

        let time = required(
            &self.time,
            Field::Time,
            "Event time is required",
            "Event time is invalid",
            parse_time,
            &mut errors,
        );

        let location = self.location.trim();
        if location.is_empty() {
            errors.push(FieldError::new(Field::Location, "Location is required"));
        }

        if self.organizer.is_empty() {
            errors.push(FieldError::new(Field::Organizer, "Organizer is required"));
        }

        let status = required(
            &self.status,
            Field::Status,
            "Status is required",
            "Status is invalid",
            |s| s.parse::<EventStatus>().ok(),
            &mut errors,
        );

        match (kind, date, time, status) {
            (Some(kind), Some(date), Some(time), Some(status)) if errors.is_empty() => {
                Ok(NewEvent {
                    name: name.to_string(),
                    kind,
                    date,
                    time,
                    location: location.to_string(),
                    organizer: self.organizer.clone(),
                    status,
                    description: self.description.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            kind: event.kind.to_string(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            organizer: event.organizer.clone(),
            status: event.status.to_string(),
            description: event.description.clone(),
        }
    }
}

fn required<T>(
    raw: &str,
    field: Field,
    missing: &'static str,
    invalid: &'static str,
    parse: impl FnOnce(&str) -> Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    if raw.is_empty() {
        errors.push(FieldError::new(field, missing));
        return None;
    }

    let parsed = parse(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(field, invalid));
    }
    parsed
}

/// Strict `HH:MM`; chrono alone would also accept `9:5`.
fn parse_time(s: &str) -> Option<NaiveTime> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    NaiveTime::parse_from_str(s, TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SEED_EVENTS;

    fn complete() -> EventDraft {
        EventDraft {
            name: "  Rust Meetup ".into(),
            kind: "Meeting".into(),
            date: "2026-06-01".into(),
            time: "18:30".into(),
            location: "Community Hall".into(),
            organizer: "Emily Davis".into(),
            status: "Planned".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = EventDraft::default().validate().unwrap_err();
        let messages = errors.iter().map(|e| e.message).collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "Event name is required",
                "Event type is required",
                "Event date is required",
                "Event time is required",
                "Location is required",
                "Organizer is required",
                "Status is required",
            ]
        );
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let draft = EventDraft {
            name: "   ".into(),
            ..complete()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::new(Field::Name, "Event name is required")]);
    }

    #[test]
    fn test_malformed_values_are_invalid() {
        let draft = EventDraft {
            kind: "Webinar".into(),
            date: "2026-02-30".into(),
            time: "6pm".into(),
            status: "Postponed".into(),
            ..complete()
        };
        let fields = draft
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect::<Vec<_>>();
        assert_eq!(fields, vec![Field::Type, Field::Date, Field::Time, Field::Status]);
    }

    #[test]
    fn test_time_must_be_zero_padded() {
        assert_eq!(parse_time("9:30"), None);
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("24:00"), None);
    }

    #[test]
    fn test_valid_draft_becomes_event() {
        let new_event = complete().validate().unwrap();
        assert_eq!(new_event.name, "Rust Meetup");

        let created = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();
        let event = new_event.into_event(16, created);
        assert_eq!(event.id, 16);
        assert_eq!(event.date, "2026-06-01");
        assert_eq!(event.time, "18:30");
        assert_eq!(event.created_date, "2026-02-12");
    }

    #[test]
    fn test_existing_event_round_trips_through_draft() {
        let original = &SEED_EVENTS[3];
        let created = original.parsed_created_date().unwrap();
        let rebuilt = EventDraft::from(original)
            .validate()
            .unwrap()
            .into_event(original.id, created);
        assert_eq!(&rebuilt, original);
    }
}
