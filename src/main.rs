//! Boardsweep main entry point
//!
//! Command-line interface for the board listing scraper. The target listing
//! and page size are fixed; the CLI only controls the output location and
//! logging verbosity.

use boardsweep::config::{self, ListingConfig};
use boardsweep::crawler::scrape;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Boardsweep: a paginated board listing scraper
#[derive(Parser, Debug)]
#[command(name = "boardsweep")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes a paginated board listing into a CSV file", long_about = None)]
struct Cli {
    /// Where to write the CSV output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut listing = ListingConfig::default();
    if let Some(output) = cli.output {
        listing.output_path = output;
    }
    config::validate(&listing)?;

    tracing::info!("Scraping {}", listing.landing_url());

    match scrape(listing).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("boardsweep=info,warn"),
            1 => EnvFilter::new("boardsweep=debug,info"),
            2 => EnvFilter::new("boardsweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
