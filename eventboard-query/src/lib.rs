mod aggregate;
mod draft;
mod error;
mod filter;
mod page;
mod query;
mod seed;
mod sort;
mod store;
mod structs;
mod summary;

pub use aggregate::{
    aggregate_by, count_by_month, count_each, month_count, MonthLabel, MAX_MONTHS,
};
pub use draft::{EventDraft, Field, FieldError, NewEvent};
pub use error::{QueryError, QueryResult};
pub use filter::{filter_events, Choice, DateWindow, EventFilter, ALL};
pub use page::{page_size, paginate, Page, DEFAULT_PAGE_SIZE};
pub use query::EventQuery;
pub use seed::{ORGANIZERS, SEED_EVENTS};
pub use sort::{sort_events, top_n_by_date, SortDirection, SortKey, TopOrder};
pub use store::{EventStore, MemoryStore};
pub use structs::{Event, EventStatus, EventType, Urgency, DATE_FORMAT, TIME_FORMAT};
pub use summary::{
    default_months, DashboardSummary, CHART_MONTHS, FIRST_CHART_MONTH, QUICK_LIST_LEN,
};
