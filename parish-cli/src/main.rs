mod commands;
mod dates;
mod logging;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use parish_core::display::EntityKind;

use crate::session::Session;

#[derive(Parser)]
#[command(name = "parish")]
#[command(about = "Calendar views over church appointments, events and birthdays")]
struct Cli {
    /// Fixture file to read (TOML or JSON), instead of the configured one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List what happens on a day
    Day {
        /// Date (YYYY-MM-DD or e.g. "tomorrow", "sat", "april 5"). Defaults to today
        date: Option<String>,

        /// appointments, events or birthdays
        #[arg(short, long, default_value = "appointments")]
        kind: EntityKind,

        /// Only this category (e.g. visit, prayer, member), or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Only this status (e.g. pending, upcoming), or "all"
        #[arg(long, default_value = "all")]
        status: String,

        /// Only entries whose title or location contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a month grid with the number of entries per day
    Month {
        /// Month as YYYY-MM. Defaults to the current month
        month: Option<String>,

        #[arg(short, long, default_value = "appointments")]
        kind: EntityKind,
    },
    /// List entries between two dates
    Range {
        /// Start date (YYYY-MM-DD, or "start" for everything before --to)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        #[arg(short, long, default_value = "appointments")]
        kind: EntityKind,
    },
    /// Appointments awaiting approval
    Pending,
    /// Upcoming birthdays
    Birthdays {
        /// How far ahead to look (e.g. "2weeks", "30days")
        #[arg(long)]
        within: Option<String>,
    },
    /// Events with the events page filters
    Events {
        /// member, community or all
        #[arg(long, default_value = "all")]
        category: String,

        /// paid, free or all
        #[arg(long, default_value = "all")]
        price: String,

        /// upcoming, past, cancelled or all
        #[arg(long, default_value = "upcoming")]
        status: String,
    },
    /// Show configuration paths and settings
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,

        /// Save this IANA time zone (e.g. "America/New_York")
        #[arg(long)]
        timezone: Option<String>,

        /// Save how many days ahead `birthdays` looks by default
        #[arg(long)]
        birthday_window: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data = cli.data;

    match cli.command {
        Commands::Day {
            date,
            kind,
            category,
            status,
            search,
        } => {
            let session = Session::load(data)?;
            let day = match date {
                Some(input) => dates::parse_day(&input, session.today)?,
                None => session.today,
            };
            commands::day::run(&session, day, kind, &category, &status, search.as_deref())
        }
        Commands::Month { month, kind } => {
            let session = Session::load(data)?;
            let month = dates::parse_month(month.as_deref(), session.today)?;
            commands::month::run(&session, month, kind)
        }
        Commands::Range { from, to, kind } => {
            let session = Session::load(data)?;
            commands::range::run(&session, from.as_deref(), to.as_deref(), kind)
        }
        Commands::Pending => commands::pending::run(&Session::load(data)?),
        Commands::Birthdays { within } => {
            commands::birthdays::run(&Session::load(data)?, within.as_deref())
        }
        Commands::Events {
            category,
            price,
            status,
        } => commands::events::run(&Session::load(data)?, &category, &price, &status),
        Commands::Config {
            init,
            timezone,
            birthday_window,
        } => commands::config::run(init, timezone, birthday_window),
    }
}
