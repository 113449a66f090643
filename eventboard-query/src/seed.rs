use once_cell::sync::Lazy;

use crate::{Event, EventStatus, EventType};

pub const ORGANIZERS: [&str; 15] = [
    "John Smith",
    "Sarah Johnson",
    "Michael Chen",
    "Emily Davis",
    "Robert Brown",
    "Lisa Martinez",
    "David Wilson",
    "Jennifer Lee",
    "Thomas Anderson",
    "Amanda Taylor",
    "Christopher Moore",
    "Patricia White",
    "Daniel Harris",
    "Michelle Garcia",
    "Kevin Rodriguez",
];

#[rustfmt::skip]
pub static SEED_EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    use EventStatus::*;
    use EventType::*;

    vec![
        event(1, "Annual Tech Conference 2026", Conference, "2026-03-15", "09:00",
            "Convention Center Hall A", "John Smith", Planned,
            "Annual technology conference featuring keynote speakers and workshops.", "2026-01-10"),
        event(2, "Product Launch Seminar", Seminar, "2026-02-28", "14:00",
            "Innovation Hub Room 203", "Sarah Johnson", Planned,
            "Introducing our latest product line to stakeholders and partners.", "2026-01-15"),
        event(3, "Q4 Strategy Meeting", Meeting, "2026-01-20", "10:00",
            "Executive Boardroom", "Michael Chen", Completed,
            "Quarterly strategy review and planning session.", "2025-12-15"),
        event(4, "Design Thinking Workshop", Workshop, "2026-03-05", "13:00",
            "Creative Studio B", "Emily Davis", Planned,
            "Interactive workshop on design thinking methodologies.", "2026-01-20"),
        event(5, "Customer Success Seminar", Seminar, "2026-02-18", "11:00",
            "Training Center", "Robert Brown", Planned,
            "Best practices for customer success management.", "2026-01-25"),
        event(6, "Team Building Workshop", Workshop, "2026-01-15", "15:00",
            "Outdoor Venue Park", "Lisa Martinez", Completed,
            "Annual team building activities and exercises.", "2025-12-20"),
        event(7, "AI & Machine Learning Conference", Conference, "2026-04-10", "08:30",
            "Tech Campus Auditorium", "David Wilson", Planned,
            "Exploring the latest trends in AI and machine learning.", "2026-02-01"),
        event(8, "Sales Kickoff Meeting", Meeting, "2026-01-05", "09:00",
            "Grand Hotel Ballroom", "Jennifer Lee", Completed,
            "Annual sales team kickoff and goal setting.", "2025-12-10"),
        event(9, "Security Awareness Seminar", Seminar, "2026-03-22", "10:30",
            "IT Department Room 101", "Thomas Anderson", Planned,
            "Cybersecurity best practices and awareness training.", "2026-02-05"),
        event(10, "Agile Development Workshop", Workshop, "2026-02-25", "09:30",
            "Development Center Lab 2", "Amanda Taylor", Planned,
            "Hands-on agile development practices and scrum framework.", "2026-01-30"),
        event(11, "Budget Planning Meeting", Meeting, "2025-12-28", "14:00",
            "Finance Office Conference Room", "Christopher Moore", Completed,
            "Annual budget review and planning for 2026.", "2025-12-01"),
        event(12, "Leadership Summit", Conference, "2026-05-15", "08:00",
            "Luxury Resort Convention Center", "Patricia White", Planned,
            "Executive leadership summit with industry experts.", "2026-02-08"),
        event(13, "Project Retrospective Meeting", Meeting, "2025-12-15", "16:00",
            "Project Office", "Daniel Harris", Cancelled,
            "Review of completed project outcomes and lessons learned.", "2025-11-20"),
        event(14, "Digital Marketing Workshop", Workshop, "2026-03-18", "11:00",
            "Marketing Department Studio", "Michelle Garcia", Planned,
            "Latest trends and strategies in digital marketing.", "2026-02-10"),
        event(15, "Compliance Training Seminar", Seminar, "2026-04-05", "13:30",
            "Legal Department Hall", "Kevin Rodriguez", Planned,
            "Mandatory compliance and regulatory training session.", "2026-02-11"),
    ]
});

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    name: &str,
    kind: EventType,
    date: &str,
    time: &str,
    location: &str,
    organizer: &str,
    status: EventStatus,
    description: &str,
    created_date: &str,
) -> Event {
    Event {
        id,
        name: name.to_string(),
        kind,
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        organizer: organizer.to_string(),
        status,
        description: description.to_string(),
        created_date: created_date.to_string(),
    }
}
