use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Event, QueryError, QueryResult};

/// Counts events per value of `selector`. Events for which the selector
/// yields `None` are not counted; keys never observed are absent.
pub fn aggregate_by<'a, I, K, F>(events: I, mut selector: F) -> BTreeMap<K, usize>
where
    I: IntoIterator<Item = &'a Event>,
    K: Ord,
    F: FnMut(&Event) -> Option<K>,
{
    let mut counts = BTreeMap::new();
    for event in events {
        if let Some(key) = selector(event) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

/// Longest run of months a chart may span.
pub const MAX_MONTHS: usize = 120;

/// Checks the number of months requested for a chart.
pub fn month_count(count: usize) -> QueryResult<usize> {
    if count == 0 || count > MAX_MONTHS {
        return QueryError::invalid_argument(format!(
            "month count must be between 1 and {MAX_MONTHS}, got {count}"
        ));
    }
    Ok(count)
}

/// A calendar month used as a chart bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthLabel {
    pub year: i32,
    pub month: u32,
}

impl MonthLabel {
    pub fn new(year: i32, month: u32) -> QueryResult<Self> {
        if !(1..=12).contains(&month) {
            return QueryError::invalid_argument(format!("month must be 1-12, got {month}"));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }

    /// `count` consecutive months beginning with `self`.
    pub fn run(self, count: usize) -> Vec<Self> {
        let mut labels = Vec::with_capacity(count);
        let mut current = self;
        for _ in 0..count {
            labels.push(current);
            current = current.next();
        }
        labels
    }

    pub fn short_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        NAMES[(self.month as usize + 11) % 12]
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_name(), self.year)
    }
}

/// Parses `YYYY-MM`.
impl FromStr for MonthLabel {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        let Some((year, month)) = s.split_once('-') else {
            return QueryError::invalid_argument(format!("expected YYYY-MM, got `{s}`"));
        };

        let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u32>()) else {
            return QueryError::invalid_argument(format!("expected YYYY-MM, got `{s}`"));
        };

        MonthLabel::new(year, month)
    }
}

/// Event counts for each requested month, in the order requested. Months
/// without events report zero.
pub fn count_by_month<'a, I>(events: I, labels: &[MonthLabel]) -> Vec<(MonthLabel, usize)>
where
    I: IntoIterator<Item = &'a Event>,
{
    let counts = aggregate_by(events, |event| event.parsed_date().map(MonthLabel::of));
    labels
        .iter()
        .map(|label| (*label, counts.get(label).copied().unwrap_or(0)))
        .collect()
}

/// Counts for every value of a closed vocabulary, in vocabulary order.
pub fn count_each<'a, I, K, F>(events: I, vocabulary: &[K], selector: F) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = &'a Event>,
    K: Ord + Copy,
    F: FnMut(&Event) -> Option<K>,
{
    let counts = aggregate_by(events, selector);
    vocabulary
        .iter()
        .map(|key| (*key, counts.get(key).copied().unwrap_or(0)))
        .collect()
}
