use chrono::NaiveDate;
use serde::Serialize;

use eventboard_query::{DashboardSummary, Event, EventStatus, EventType, FieldError, Page, Urgency};

const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 30;

/// An event in the upcoming view together with how far away it is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingRow<'a> {
    #[serde(flatten)]
    pub event: &'a Event,
    pub days_until: Option<i64>,
    pub urgency: Option<Urgency>,
}

impl<'a> UpcomingRow<'a> {
    pub fn new(event: &'a Event, today: NaiveDate) -> Self {
        let days_until = event.days_until(today);
        Self {
            event,
            days_until,
            urgency: days_until.map(Urgency::from_days),
        }
    }
}

fn status_color(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Planned => "\x1b[34m",
        EventStatus::Completed => "\x1b[32m",
        EventStatus::Cancelled => "\x1b[31m",
    }
}

fn type_color(kind: EventType) -> &'static str {
    match kind {
        EventType::Seminar => "\x1b[35m",
        EventType::Meeting => "\x1b[36m",
        EventType::Workshop => "\x1b[33m",
        EventType::Conference => "\x1b[34m",
    }
}

fn urgency_color(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Imminent => "\x1b[31m",
        Urgency::Soon => "\x1b[33m",
        Urgency::Later => "\x1b[34m",
    }
}

struct Cell {
    text: String,
    color: Option<&'static str>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

fn table(headers: &[&str], rows: Vec<Vec<Cell>>, color: bool) -> String {
    let mut widths = headers
        .iter()
        .map(|h| h.chars().count())
        .collect::<Vec<_>>();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }

    let mut out = String::new();
    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<w$}", h.to_uppercase()))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));

    for row in rows {
        out.push('\n');
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = " ".repeat(width - cell.text.chars().count());
                match cell.color {
                    Some(code) if color => format!("{code}{}{RESET}{pad}", cell.text),
                    _ => format!("{}{pad}", cell.text),
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
    }
    out
}

/// `Mar 15, 2026`, or the stored text if it is not a valid date.
fn display_date(event: &Event) -> String {
    event
        .parsed_date()
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| event.date.clone())
}

fn range_line<T>(page: &Page<T>, noun: &str) -> String {
    if page.is_empty() {
        return format!(
            "Page {} is empty, {} {noun} on {} page(s)",
            page.page, page.total, page.total_pages
        );
    }
    format!(
        "Showing {}-{} of {} {noun}",
        page.start_index + 1,
        page.end_index,
        page.total
    )
}

fn page_line<T>(page: &Page<T>) -> Option<String> {
    (page.total_pages > 1).then(|| format!("Page {} of {}", page.page, page.total_pages))
}

pub fn event_list(page: &Page<&Event>, color: bool) -> String {
    if page.total == 0 {
        return "No events found.\nTry adjusting your search or filters.".to_string();
    }

    let rows = page
        .items
        .iter()
        .map(|event| {
            vec![
                Cell::plain(event.name.as_str()),
                Cell::colored(event.kind.as_str(), type_color(event.kind)),
                Cell::plain(display_date(event)),
                Cell::plain(event.location.as_str()),
                Cell::colored(event.status.as_str(), status_color(event.status)),
                Cell::plain(event.organizer.as_str()),
            ]
        })
        .collect();

    let mut out = range_line(page, "events");
    out.push_str("\n\n");
    out.push_str(&table(
        &["Name", "Type", "Date", "Location", "Status", "Organizer"],
        rows,
        color,
    ));
    if let Some(line) = page_line(page) {
        out.push_str("\n\n");
        out.push_str(&line);
    }
    out
}

fn days_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

pub fn upcoming_list(
    page: &Page<UpcomingRow<'_>>,
    upcoming_total: usize,
    color: bool,
) -> String {
    if page.total == 0 {
        return "No upcoming events.\nThere are no upcoming events matching your criteria."
            .to_string();
    }

    let rows = page
        .items
        .iter()
        .map(|row| {
            let event = row.event;
            let days = match (row.days_until, row.urgency) {
                (Some(days), Some(urgency)) => {
                    Cell::colored(days_label(days), urgency_color(urgency))
                }
                _ => Cell::plain("-"),
            };
            vec![
                Cell::plain(event.name.as_str()),
                Cell::colored(event.kind.as_str(), type_color(event.kind)),
                Cell::plain(display_date(event)),
                Cell::plain(event.time.as_str()),
                Cell::plain(event.location.as_str()),
                Cell::plain(event.organizer.as_str()),
                days,
            ]
        })
        .collect();

    let mut out = format!("{upcoming_total} upcoming\n");
    out.push_str(&range_line(page, "upcoming events"));
    out.push_str("\n\n");
    out.push_str(&table(
        &["Name", "Type", "Date", "Time", "Location", "Organizer", "Days Until"],
        rows,
        color,
    ));
    if let Some(line) = page_line(page) {
        out.push_str("\n\n");
        out.push_str(&line);
    }
    out
}

fn bar_chart<L: ToString>(title: &str, counts: &[(L, usize)]) -> String {
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let labels = counts
        .iter()
        .map(|(label, _)| label.to_string())
        .collect::<Vec<_>>();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = title.to_string();
    for (label, (_, count)) in labels.iter().zip(counts) {
        let bar = if max == 0 {
            0
        } else {
            (count * BAR_WIDTH).div_ceil(max)
        };
        out.push_str(&format!(
            "\n  {label:<label_width$}  {:<width$}  {count}",
            "#".repeat(bar),
            width = BAR_WIDTH
        ));
    }
    out
}

fn quick_list(title: &str, events: &[&Event], color: bool) -> String {
    if events.is_empty() {
        return format!("{title}\n  (none)");
    }
    let rows = events
        .iter()
        .map(|event| {
            vec![
                Cell::plain(event.name.as_str()),
                Cell::colored(event.kind.as_str(), type_color(event.kind)),
                Cell::plain(display_date(event)),
                Cell::colored(event.status.as_str(), status_color(event.status)),
            ]
        })
        .collect();
    format!(
        "{title}\n{}",
        table(&["Name", "Type", "Date", "Status"], rows, color)
    )
}

pub fn dashboard(summary: &DashboardSummary<'_>, color: bool) -> String {
    let cards = [
        ("Total Events", summary.total_events),
        ("Upcoming Events", summary.upcoming_events),
        ("Completed Events", summary.completed_events),
        ("Events This Month", summary.events_this_month),
    ];

    let mut sections = vec![cards
        .iter()
        .map(|(title, value)| format!("{title:<18} {value}"))
        .collect::<Vec<_>>()
        .join("\n")];

    sections.push(bar_chart("Events by Month", &summary.by_month));
    sections.push(bar_chart("Events by Type", &summary.by_type));
    sections.push(bar_chart("Events by Status", &summary.by_status));
    sections.push(quick_list("Next Upcoming", &summary.next_upcoming, color));
    sections.push(quick_list("Recently Added", &summary.recently_added, color));

    sections.join("\n\n")
}

pub fn created(event: &Event) -> String {
    format!(
        "Event {} is valid (preview only, nothing was saved)\n\n\
         Name:        {}\n\
         Type:        {}\n\
         Date:        {} {}\n\
         Location:    {}\n\
         Organizer:   {}\n\
         Status:      {}\n\
         Description: {}",
        event.id,
        event.name,
        event.kind,
        display_date(event),
        event.time,
        event.location,
        event.organizer,
        event.status,
        event.description,
    )
}

pub fn field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|err| format!("  {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use eventboard_query::{default_months, paginate, EventQuery, SEED_EVENTS};
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()
    }

    #[test]
    fn test_list_shows_range_and_pages() {
        let page = EventQuery::default().run(&SEED_EVENTS).unwrap();
        let out = event_list(&page, false);

        assert!(out.starts_with("Showing 1-10 of 15 events"));
        assert!(out.ends_with("Page 1 of 2"));
        assert!(out.contains("Annual Tech Conference 2026"));
        assert!(out.contains("Mar 15, 2026"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_empty_list_message() {
        let page = paginate::<&Event>(&[], 1, 10).unwrap();
        assert_eq!(
            event_list(&page, false),
            "No events found.\nTry adjusting your search or filters."
        );
    }

    #[test]
    fn test_page_past_the_end() {
        let query = EventQuery {
            page: 4,
            ..Default::default()
        };
        let page = query.run(&SEED_EVENTS).unwrap();
        assert_eq!(
            event_list(&page, false),
            "Page 4 is empty, 15 events on 2 page(s)"
        );
    }

    #[test]
    fn test_badges_are_colored_on_terminals() {
        let page = EventQuery::default().run(&SEED_EVENTS).unwrap();
        let out = event_list(&page, true);
        assert!(out.contains("\x1b[34mPlanned\x1b[0m"));
        assert!(out.contains("\x1b[32mCompleted\x1b[0m"));
    }

    #[test]
    fn test_upcoming_days_labels() {
        let rows = EventQuery::upcoming(today())
            .run(&SEED_EVENTS)
            .unwrap()
            .map(|event| UpcomingRow::new(event, today()));

        assert_eq!(rows.items[0].event.id, 5);
        assert_eq!(rows.items[0].days_until, Some(33));
        assert_eq!(rows.items[0].urgency, Some(Urgency::Later));

        let out = upcoming_list(&rows, 10, false);
        assert!(out.starts_with("10 upcoming\nShowing 1-10 of 10 upcoming events"));
        assert!(out.contains("33 days"));
    }

    #[test]
    fn test_dashboard_sections() {
        let summary = DashboardSummary::compute(&SEED_EVENTS, today(), &default_months());
        let out = dashboard(&summary, false);

        assert!(out.starts_with("Total Events       15\nUpcoming Events    10"));
        assert!(out.contains("Events by Month\n  Dec 2025"));
        assert!(out.contains("Events by Status"));
        assert!(out.contains("Recently Added"));
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let chart = bar_chart("Counts", &[("a", 2), ("b", 1), ("c", 0)]);
        let lines = chart.lines().collect::<Vec<_>>();
        assert_eq!(lines[1].matches('#').count(), BAR_WIDTH);
        assert_eq!(lines[2].matches('#').count(), BAR_WIDTH / 2);
        assert_eq!(lines[3].matches('#').count(), 0);
    }
}
