use std::env;
use std::path::PathBuf;
use std::process;

use chrono::{Local, NaiveDate};
use getopts::{Matches, Options};

use eventboard_query::{EventDraft, ALL, CHART_MONTHS, DATE_FORMAT, DEFAULT_PAGE_SIZE};

const TODAY_VAR: &str = "EVENTBOARD_TODAY";
const DATA_VAR: &str = "EVENTBOARD_DATA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Dashboard,
    List,
    Upcoming,
    Create,
}

#[derive(Debug, Clone)]
pub struct Args {
    pub command: Command,
    pub search: String,
    pub status: String,
    pub kind: String,
    pub sort: Option<String>,
    pub descending: bool,
    pub page: usize,
    /// Signed so that a negative value reaches the page-size check.
    pub page_size: i64,
    pub first_month: Option<String>,
    pub month_count: usize,
    pub today: NaiveDate,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub draft: EventDraft,
}

enum Parsed {
    Help(String),
    Run(Box<Args>),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "s",
        "search",
        "Case-insensitive match on name, location or organizer",
        "TEXT",
    );
    opts.optopt(
        "",
        "status",
        "Planned, Completed, Cancelled or all [Default: all]",
        "STATUS",
    );
    opts.optopt(
        "t",
        "type",
        "Seminar, Meeting, Workshop, Conference or all [Default: all]",
        "TYPE",
    );
    opts.optopt("", "sort", "Sort by date, created, name or id", "KEY");
    opts.optflag("", "desc", "Sort in descending order");
    opts.optopt("p", "page", "Page to show, starting at 1 [Default: 1]", "N");
    opts.optopt("n", "page-size", "Rows per page [Default: 10]", "N");
    opts.optopt(
        "",
        "from",
        "First month charted by the dashboard [Default: 2025-12]",
        "YYYY-MM",
    );
    opts.optopt("", "months", "Number of months charted, 1 to 120 [Default: 6]", "N");
    opts.optopt(
        "",
        "today",
        "Reference date for upcoming events [Default: $EVENTBOARD_TODAY or the local date]",
        "YYYY-MM-DD",
    );
    opts.optopt(
        "d",
        "data",
        "JSON file with events to use instead of the built-in set [Default: $EVENTBOARD_DATA]",
        "FILE",
    );
    opts.optflag("j", "json", "Print JSON instead of tables");
    opts.optopt("", "name", "Event name (create)", "TEXT");
    opts.optopt("", "date", "Event date (create)", "YYYY-MM-DD");
    opts.optopt("", "time", "Event time (create)", "HH:MM");
    opts.optopt("", "location", "Event location (create)", "TEXT");
    opts.optopt("", "organizer", "Event organizer (create)", "TEXT");
    opts.optopt("", "description", "Event description (create)", "TEXT");
    opts
}

fn usage(opts: &Options) -> String {
    let brief = format!(
        "Usage: {} [dashboard|list|upcoming|create] [options]",
        env!("CARGO_PKG_NAME")
    );
    opts.usage(&brief)
}

pub fn parse(args: Vec<String>) -> Args {
    match try_parse(args) {
        Ok(Parsed::Run(args)) => *args,
        Ok(Parsed::Help(usage)) => {
            println!("{usage}");
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn try_parse(args: Vec<String>) -> Result<Parsed, String> {
    let opts = opts();
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(Parsed::Help(usage(&opts)));
    }

    let command = match matches.free.as_slice() {
        [] => Command::Dashboard,
        [command] => match command.as_str() {
            "dashboard" => Command::Dashboard,
            "list" => Command::List,
            "upcoming" => Command::Upcoming,
            "create" => Command::Create,
            other => return Err(format!("Unknown command '{other}'")),
        },
        [_, extra, ..] => return Err(format!("Unexpected argument '{extra}'")),
    };

    let page = number(&matches, "page", 1)?;
    let page_size = number(&matches, "page-size", DEFAULT_PAGE_SIZE as i64)?;
    let month_count = number(&matches, "months", CHART_MONTHS)?;

    let today = match matches.opt_str("today").or_else(|| env::var(TODAY_VAR).ok()) {
        Some(raw) => NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map_err(|err| format!("Provided value for option 'today' is invalid: {err}"))?,
        None => Local::now().date_naive(),
    };

    let data = matches
        .opt_str("data")
        .or_else(|| env::var(DATA_VAR).ok())
        .map(PathBuf::from);

    let status = matches.opt_str("status");
    let kind = matches.opt_str("type");

    let draft = EventDraft {
        name: matches.opt_str("name").unwrap_or_default(),
        kind: kind.clone().unwrap_or_default(),
        date: matches.opt_str("date").unwrap_or_default(),
        time: matches.opt_str("time").unwrap_or_default(),
        location: matches.opt_str("location").unwrap_or_default(),
        organizer: matches.opt_str("organizer").unwrap_or_default(),
        status: status.clone().unwrap_or_default(),
        description: matches.opt_str("description").unwrap_or_default(),
    };

    Ok(Parsed::Run(Box::new(Args {
        command,
        search: matches.opt_str("search").unwrap_or_default(),
        status: status.unwrap_or_else(|| ALL.to_string()),
        kind: kind.unwrap_or_else(|| ALL.to_string()),
        sort: matches.opt_str("sort"),
        descending: matches.opt_present("desc"),
        page,
        page_size,
        first_month: matches.opt_str("from"),
        month_count,
        today,
        data,
        json: matches.opt_present("json"),
        draft,
    })))
}

fn number<T>(matches: &Matches, name: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .opt_get_default(name, default)
        .map_err(|err| format!("Provided value for option '{name}' is invalid: {err}"))
}
