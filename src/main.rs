//! CLI entry point for the earthquake statistics tool.
//!
//! Fetches earthquake records from the USGS event service (or a saved
//! snapshot), summarizes them by year and prints a report with two charts.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use quake_stats::{
    chart::{render_count_chart, render_magnitude_chart},
    fetch::{BasicClient, fetch_bytes},
    output::{format_report, print_json, print_pretty, write_year_table},
    parser::parse_collection,
    query::{
        DEFAULT_END_TIME, DEFAULT_MAX_LATITUDE, DEFAULT_MAX_LONGITUDE, DEFAULT_MIN_LATITUDE,
        DEFAULT_MIN_LONGITUDE, DEFAULT_MIN_MAGNITUDE, DEFAULT_START_TIME, EventQuery,
        USGS_QUERY_URL,
    },
    record::EventCollection,
    source::{EventSource, SnapshotFile, UsgsFeed, save_snapshot},
    stats::EventSummary,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "quake_stats")]
#[command(about = "Summarize USGS earthquake records by year", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the USGS feed and save the raw response as a snapshot
    Fetch {
        /// File to write the snapshot to
        #[arg(short, long, default_value = "text.json")]
        output: String,

        #[command(flatten)]
        query: QueryArgs,
    },
    /// Summarize a saved snapshot, or a feed URL
    Analyze {
        /// Path to snapshot file or URL to fetch
        #[arg(value_name = "FILE_OR_URL", default_value = "text.json")]
        source: String,

        #[command(flatten)]
        present: PresentArgs,
    },
    /// Query the USGS feed and summarize the result without saving it
    Report {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        present: PresentArgs,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Earliest event date (YYYY-MM-DD)
    #[arg(long, default_value_t = DEFAULT_START_TIME)]
    start_time: NaiveDate,

    /// Latest event date (YYYY-MM-DD)
    #[arg(long, default_value_t = DEFAULT_END_TIME)]
    end_time: NaiveDate,

    #[arg(long, default_value_t = DEFAULT_MIN_LATITUDE, allow_negative_numbers = true)]
    min_latitude: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_LATITUDE, allow_negative_numbers = true)]
    max_latitude: f64,

    #[arg(long, default_value_t = DEFAULT_MIN_LONGITUDE, allow_negative_numbers = true)]
    min_longitude: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_LONGITUDE, allow_negative_numbers = true)]
    max_longitude: f64,

    /// Smallest magnitude to include
    #[arg(long, default_value_t = DEFAULT_MIN_MAGNITUDE)]
    min_magnitude: f64,
}

impl From<QueryArgs> for EventQuery {
    fn from(args: QueryArgs) -> Self {
        EventQuery {
            start_time: args.start_time,
            end_time: args.end_time,
            min_latitude: args.min_latitude,
            max_latitude: args.max_latitude,
            min_longitude: args.min_longitude,
            max_longitude: args.max_longitude,
            min_magnitude: args.min_magnitude,
        }
    }
}

#[derive(Args)]
struct PresentArgs {
    /// CSV file to write the year table to
    #[arg(long)]
    csv: Option<String>,

    /// Also log the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Skip the charts
    #[arg(long, default_value_t = false)]
    no_charts: bool,

    /// Length of the longest bar in the count chart
    #[arg(long, default_value_t = 60)]
    chart_width: usize,

    /// Number of rows in the magnitude chart
    #[arg(long, default_value_t = 12)]
    chart_height: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/quake_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("quake_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let feed_url = std::env::var("QUAKE_FEED_URL").unwrap_or_else(|_| USGS_QUERY_URL.to_string());

    match cli.command {
        Commands::Fetch { output, query } => {
            let feed = UsgsFeed::new(BasicClient::new()?, feed_url, query.into());
            let bytes = feed.fetch_raw().await?;

            // Refuse to cache a document the analyzer could not read back.
            let events = parse_collection(&bytes)?;
            info!(events = events.len(), "Feed validated");

            save_snapshot(Path::new(&output), &bytes)?;
        }
        Commands::Analyze { source, present } => {
            let events = load(&source).await?;
            report(&events, &present)?;
        }
        Commands::Report { query, present } => {
            let feed = UsgsFeed::new(BasicClient::new()?, feed_url, query.into());
            let events = feed.load_events().await?;
            report(&events, &present)?;
        }
    }

    Ok(())
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads events from a local snapshot path or fetches them over HTTP.
#[tracing::instrument(fields(source = %source))]
async fn load(source: &str) -> Result<EventCollection> {
    if is_remote(source) {
        let client = BasicClient::new()?;
        let bytes = fetch_bytes(&client, source).await?;
        Ok(parse_collection(&bytes)?)
    } else {
        SnapshotFile::new(source).load_events().await
    }
}

/// Summarizes the collection and presents the result.
fn report(events: &EventCollection, present: &PresentArgs) -> Result<()> {
    let summary = EventSummary::from_events(events);
    print_pretty(&summary);

    if summary.without_magnitude > 0 {
        warn!(
            without_magnitude = summary.without_magnitude,
            "Skipping earthquakes with no magnitude"
        );
    }

    print!("{}", format_report(&summary));

    if present.json {
        print_json(&summary)?;
    }

    if let Some(path) = &present.csv {
        write_year_table(path, &summary.years)?;
        info!(path = %path, years = summary.years.len(), "Year table written");
    }

    if !present.no_charts {
        println!();
        let years = summary.year_axis();
        print!(
            "{}",
            render_count_chart(&years, &summary.counts(), present.chart_width)
        );
        println!();
        print!(
            "{}",
            render_magnitude_chart(&years, &summary.average_magnitudes(), present.chart_height)
        );
    }

    Ok(())
}
