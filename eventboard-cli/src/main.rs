mod cli;
mod render;

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;

use eventboard_query::{
    filter_events, month_count, page_size, Choice, DashboardSummary, Event, EventFilter,
    EventQuery, EventStore, FieldError, MemoryStore, MonthLabel, QueryError, SortDirection,
    SortKey, FIRST_CHART_MONTH, SEED_EVENTS,
};

use crate::cli::{Args, Command};
use crate::render::UpcomingRow;

const LOG_VAR: &str = "EVENTBOARD_LOG";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to load events from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("event is invalid ({0} field(s) rejected)")]
    Invalid(usize),
}

type CliResult<T> = Result<T, CliError>;

fn setup_logging() {
    if env::var(LOG_VAR).is_err() {
        env::set_var(LOG_VAR, "eventboard=info");
    }

    pretty_env_logger::init_custom_env(LOG_VAR);
}

fn main() -> ExitCode {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CliResult<String> {
    let events = load_events(args.data.as_deref())?;
    let color = !args.json && io::stdout().is_terminal();

    match args.command {
        Command::Dashboard => dashboard(&events, args, color),
        Command::List => list(&events, args, color),
        Command::Upcoming => upcoming(&events, args, color),
        Command::Create => create(events, args),
    }
}

fn load_events(path: Option<&Path>) -> CliResult<Vec<Event>> {
    let Some(path) = path else {
        info!("Using the built-in set of {} events", SEED_EVENTS.len());
        return Ok(SEED_EVENTS.clone());
    };

    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let events: Vec<Event> = serde_json::from_str(&raw).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for event in &events {
        if !seen.insert(event.id) {
            warn!("Event id {} appears more than once in {}", event.id, path.display());
        }
    }

    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn sort_option(args: &Args) -> CliResult<Option<(SortKey, SortDirection)>> {
    let direction = if args.descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    match &args.sort {
        Some(key) => Ok(Some((key.parse::<SortKey>()?, direction))),
        None if args.descending => Ok(Some((SortKey::Date, direction))),
        None => Ok(None),
    }
}

fn dashboard(events: &[Event], args: &Args, color: bool) -> CliResult<String> {
    let first = match &args.first_month {
        Some(first) => first.parse::<MonthLabel>()?,
        None => FIRST_CHART_MONTH,
    };
    let months = first.run(month_count(args.month_count)?);

    let summary = DashboardSummary::compute(events, args.today, &months);
    if args.json {
        return to_json(&summary);
    }
    Ok(render::dashboard(&summary, color))
}

fn list(events: &[Event], args: &Args, color: bool) -> CliResult<String> {
    let query = EventQuery {
        filter: EventFilter {
            search: args.search.clone(),
            status: Choice::parse(&args.status),
            kind: Choice::parse(&args.kind),
            date_window: None,
        },
        sort: sort_option(args)?,
        page: args.page,
        page_size: page_size(args.page_size)?,
    };

    let page = query.run(events)?;
    if args.json {
        return to_json(&page);
    }
    Ok(render::event_list(&page, color))
}

fn upcoming(events: &[Event], args: &Args, color: bool) -> CliResult<String> {
    let base = EventQuery::upcoming(args.today);
    let upcoming_total = filter_events(events, &base.filter).len();

    let query = EventQuery {
        filter: EventFilter {
            search: args.search.clone(),
            kind: Choice::parse(&args.kind),
            ..base.filter.clone()
        },
        sort: sort_option(args)?.or(base.sort),
        page: args.page,
        page_size: page_size(args.page_size)?,
    };

    let page = query
        .run(events)?
        .map(|event| UpcomingRow::new(event, args.today));
    if args.json {
        return to_json(&page);
    }
    Ok(render::upcoming_list(&page, upcoming_total, color))
}

#[derive(Serialize)]
struct Rejected<'a> {
    errors: &'a [FieldError],
}

fn create(events: Vec<Event>, args: &Args) -> CliResult<String> {
    let new_event = match args.draft.validate() {
        Ok(new_event) => new_event,
        Err(errors) => {
            if args.json {
                println!("{}", to_json(&Rejected { errors: &errors })?);
            } else {
                eprintln!("{}", render::field_errors(&errors));
            }
            return Err(CliError::Invalid(errors.len()));
        }
    };

    let mut store = MemoryStore::new(events);
    let event = store.insert(new_event, args.today)?;
    info!("Validated event {} `{}`, not persisted", event.id, event.name);

    if args.json {
        return to_json(event);
    }
    Ok(render::created(event))
}
