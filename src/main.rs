//! Magpie-Scrape main entry point
//!
//! Runs the full scrape against the fixed challenge-site URLs and writes
//! output.json. Any fetch or serialization failure aborts the process with
//! a non-zero exit and no JSON written.

use clap::Parser;
use magpie_scrape::output::{write_products, OUTPUT_PATH};
use magpie_scrape::{run_scrape, ROOT_URL};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Magpie-Scrape: product-listing scraper
///
/// Crawls the magpiehq developer-challenge smartphone listing and writes one
/// JSON record per (product, colour) pair to output.json. The root URL, base
/// URL and output path are fixed; only logging verbosity is configurable.
#[derive(Parser, Debug)]
#[command(name = "magpie-scrape")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes the magpiehq developer-challenge product listing", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Starting scrape of {}", ROOT_URL);
    let products = run_scrape().await?;

    write_products(Path::new(OUTPUT_PATH), &products)?;
    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("magpie_scrape=info,warn"),
            1 => EnvFilter::new("magpie_scrape=debug,info"),
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
