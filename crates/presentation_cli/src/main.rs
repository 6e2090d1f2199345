//! climatrack CLI
//!
//! Fetches historical daily weather for one calendar date across years,
//! stores the batch with its aggregates, and prints the stored rows as a
//! console report.

#![allow(clippy::print_stdout)]

mod interactive;
mod report;

use std::sync::Arc;

use application::{ApplicationError, ObservationService};
use clap::Parser;
use domain::DomainError;
use domain::query::ObservationQuery;
use domain::value_objects::{CalendarDate, GeoLocation};
use infrastructure::{AppConfig, ArchiveAdapter, SqliteObservationStore, create_pool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// climatrack CLI
#[derive(Debug, Parser)]
#[command(name = "climatrack")]
#[command(author, version, about = "Historical single-date weather, aggregated and stored", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use the configured defaults without prompting
    #[arg(long)]
    use_defaults: bool,

    /// Latitude of the observation point
    #[arg(long)]
    latitude: Option<f64>,

    /// Longitude of the observation point
    #[arg(long)]
    longitude: Option<f64>,

    /// Calendar month (1-12)
    #[arg(long)]
    month: Option<u32>,

    /// Calendar day of month
    #[arg(long)]
    day: Option<u32>,

    /// Explicit years, comma-separated (overrides --num-years/--last-year)
    #[arg(long, value_delimiter = ',')]
    years: Option<Vec<i32>>,

    /// Number of trailing years to fetch
    #[arg(long)]
    num_years: Option<u32>,

    /// Last (most recent) year of the range
    #[arg(long)]
    last_year: Option<i32>,

    /// Path to the SQLite database file
    #[arg(long)]
    database: Option<String>,
}

impl Cli {
    /// Whether any query parameter was given on the command line
    const fn has_query_args(&self) -> bool {
        self.use_defaults
            || self.latitude.is_some()
            || self.longitude.is_some()
            || self.month.is_some()
            || self.day.is_some()
            || self.years.is_some()
            || self.num_years.is_some()
            || self.last_year.is_some()
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Resolve the query from CLI flags, config defaults, or the prompt sequence
fn resolve_query(cli: &Cli, config: &AppConfig) -> anyhow::Result<ObservationQuery> {
    let mut defaults = config.query;
    if let Some(latitude) = cli.latitude {
        defaults.latitude = latitude;
    }
    if let Some(longitude) = cli.longitude {
        defaults.longitude = longitude;
    }
    if let Some(month) = cli.month {
        defaults.month = month;
    }
    if let Some(day) = cli.day {
        defaults.day = day;
    }
    if let Some(num_years) = cli.num_years {
        defaults.num_years = num_years;
    }
    if let Some(last_year) = cli.last_year {
        defaults.last_year = last_year;
    }

    if let Some(years) = &cli.years {
        let location = GeoLocation::new(defaults.latitude, defaults.longitude)?;
        let date = CalendarDate::new(defaults.month, defaults.day)?;
        return Ok(ObservationQuery::new(location, date, years.clone())?);
    }

    if cli.has_query_args() {
        return Ok(defaults.to_query()?);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Ok(interactive::collect_query(
        stdin.lock(),
        stdout.lock(),
        &defaults,
    )?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = AppConfig::load()?;
    if let Some(database) = cli.database.clone() {
        config.database.path = database;
    }

    let query = resolve_query(&cli, &config)?;

    println!("\nProcessing...");

    let pool = create_pool(&config.database)?;
    let store = SqliteObservationStore::new(Arc::new(pool));
    let archive = ArchiveAdapter::with_config(config.archive.clone())?;
    let service = ObservationService::new(Arc::new(archive), Arc::new(store));

    let series = service.fetch_series(&query).await;
    println!(
        "Data gathered from weather archive: {} of {} years.",
        series.len(),
        query.years().len()
    );

    match service.persist(&query, &series).await {
        Ok(written) => println!("Data has been added to the table ({written} rows)."),
        Err(ApplicationError::Domain(DomainError::EmptySeries)) => {
            println!("No year in the batch returned data; nothing was stored.");
            std::process::exit(1);
        },
        Err(e) => return Err(e.into()),
    }

    let rows = service.report(&query).await?;

    println!();
    println!("{}", report::headline(&query));
    println!("{}", report::render_table(&rows));

    Ok(())
}
