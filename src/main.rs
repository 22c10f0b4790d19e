use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, trace};

use people_query::{
    earliest_birthdate, is_prime, load_people_csv, names_of, oldest, primes_up_to,
    sample_people, still_to_celebrate_with, CalendarPolicy, Person, QueryConfig, QueryReport,
};

#[derive(Parser)]
#[command(name = "people-query")]
#[command(version = people_query::VERSION)]
#[command(about = "Query birthdays in a list of people", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query and print a report
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all names
    Names {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List people whose birthday is still ahead this year
    Upcoming {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the oldest person and the earliest birthdate
    Oldest {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Check whether a number is prime
    Prime {
        number: u64,
    },
    /// List primes up to a limit
    Primes {
        #[arg(long)]
        up_to: u64,
    },
}

#[derive(Args)]
struct InputArgs {
    /// CSV file with Name,Birth_Timestamp columns (default: built-in sample)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference date, YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Day-of-year rule: gregorian or fixed-non-leap
    #[arg(long)]
    calendar: Option<CalendarPolicy>,
}

/// Everything a query needs, with flags applied over the config file
struct QueryInput {
    people: Vec<Person>,
    reference: DateTime<Utc>,
    calendar: CalendarPolicy,
}

impl InputArgs {
    fn resolve(self) -> Result<QueryInput> {
        let mut config = match &self.config {
            Some(path) => QueryConfig::from_file(path)?,
            None => QueryConfig::default(),
        };
        if let Some(calendar) = self.calendar {
            config = config.with_calendar(calendar);
        }
        if let Some(file) = self.file {
            config = config.with_people_file(file);
        }

        let people = match &config.people_file {
            Some(path) => load_people_csv(path)?,
            None => sample_people(),
        };

        // The clock is read here and nowhere in the library
        let reference = match self.today {
            Some(date) => date
                .and_hms_opt(0, 0, 0)
                .context("Invalid reference date")?
                .and_utc(),
            None => Utc::now(),
        };

        debug!(
            "{} people, reference {}, calendar {}",
            people.len(),
            reference,
            config.calendar
        );

        Ok(QueryInput {
            people,
            reference,
            calendar: config.calendar,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    match cli.command {
        Commands::Report { input, json } => run_report(input.resolve()?, json)?,
        Commands::Names { input } => {
            for name in names_of(&input.resolve()?.people) {
                println!("{}", name);
            }
        }
        Commands::Upcoming { input } => run_upcoming(input.resolve()?),
        Commands::Oldest { input } => run_oldest(input.resolve()?),
        Commands::Prime { number } => {
            if is_prime(number) {
                println!("✓ {} is prime", number);
            } else {
                println!("✗ {} is not prime", number);
            }
        }
        Commands::Primes { up_to } => {
            let primes: Vec<String> = primes_up_to(up_to).iter().map(u64::to_string).collect();
            println!("{}", primes.join(" "));
        }
    }

    Ok(())
}

fn run_report(input: QueryInput, json: bool) -> Result<()> {
    let report = QueryReport::build(&input.people, input.reference, input.calendar);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
        return Ok(());
    }

    println!("📋 {}", report.summary());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Names: {}", report.names.join(", "));
    println!("Still to celebrate:");
    for person in &report.still_to_celebrate {
        print_person(person);
    }
    if let Some(earliest) = report.earliest_birthdate {
        println!("Earliest birthdate: {}", earliest.format("%Y-%m-%d"));
    }

    Ok(())
}

fn run_upcoming(input: QueryInput) {
    let upcoming = still_to_celebrate_with(&input.people, input.reference, input.calendar);

    if upcoming.is_empty() {
        println!("No birthdays left this year");
    }
    for person in &upcoming {
        print_person(person);
    }
}

fn run_oldest(input: QueryInput) {
    match oldest(&input.people) {
        Some(person) => print_person(person),
        None => println!("No people loaded"),
    }
    if let Some(earliest) = earliest_birthdate(&input.people) {
        println!("Earliest birth timestamp: {}", earliest.timestamp());
    }
}

fn print_person(person: &Person) {
    println!("  {} ({})", person.name, person.birthdate.format("%Y-%m-%d"));
}
