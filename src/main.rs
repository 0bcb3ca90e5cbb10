//! Hidden Listings main entry point
//!
//! This is the command-line interface for the Hidden Listings scraper.

use anyhow::Context;
use clap::Parser;
use hidden_listings::config::{load_config, validate, Config};
use hidden_listings::crawler::ListingScraper;
use hidden_listings::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Hidden Listings: finds rental listings the site does not link to
///
/// Probes every numbered listing page of a rental site, extracts landlord,
/// bed/bath and price from the pages that exist, and saves them to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "hidden-listings")]
#[command(version = "1.0.0")]
#[command(about = "Finds unlinked rental listings", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the CSV output path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be scanned without scanning
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.csv_path = output.to_string_lossy().into_owned();
        validate(&config).context("invalid --output path")?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("hidden_listings=info,warn"),
            1 => EnvFilter::new("hidden_listings=debug,info"),
            2 => EnvFilter::new("hidden_listings=trace,debug"),
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

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== Hidden Listings Dry Run ===\n");

    println!("Site:");
    println!("  Name: {}", config.site.name);
    println!("  URL template: {}", config.site.url_template);
    println!("  Query: {}", config.site.query);
    println!("  IDs: 1..={}", config.site.max_id);
    println!("  Title pattern: {}", config.site.title_pattern);
    println!("  Price pattern: {}", config.site.price_pattern);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);

    println!("\nDelay:");
    println!(
        "  {}-{}ms ({})",
        config.delay.min_ms,
        config.delay.max_ms,
        if config.delay.per_request {
            "drawn per request"
        } else {
            "drawn once per scan"
        }
    );

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main scan and prints the results
async fn handle_scrape(config: &Config) -> anyhow::Result<()> {
    let scraper = ListingScraper::from_config(config).context("failed to build scraper")?;

    tracing::info!("Starting scan of {}", scraper.source_name());
    let report = scraper.run().await;

    println!("\nFinal Results:");
    for listing in &report.listings {
        println!("{}", listing);
    }
    println!();

    print_statistics(&report.statistics);

    if report.csv_written {
        println!("\nDone. Listings saved to {}", report.csv_path.display());
    } else {
        println!(
            "\nDone. Listings could not be saved to {}",
            report.csv_path.display()
        );
    }

    Ok(())
}
