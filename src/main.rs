// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, so stdout carries just the report)
// 3. Fetch the user's events once and print either JSON or the summary
// 4. Exit with 0 on success, 1 on any fetch or render error
// =============================================================================

mod cli;
mod github;
mod summary;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use github::{EventFetcher, FetcherConfig};
use summary::{MalformedPolicy, Renderer};

#[tokio::main]
async fn main() {
    // clap prints usage and exits with code 2 on a missing username
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG, when set, overrides the -v flags
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,github_activity={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(())  = report printed to stdout
//   Err     = fetch or render failed; main() prints it and exits with 1
async fn run(cli: Cli) -> Result<()> {
    // All request settings come from the CLI; the User-Agent keeps its default
    let fetcher = EventFetcher::new(FetcherConfig {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
        ..FetcherConfig::default()
    })
    .context("failed to create HTTP client")?;

    // --json: print the decoded records as they came from GitHub, no summary
    if cli.json {
        let events = fetcher
            .user_events(&cli.username)
            .await
            .with_context(|| format!("error getting user events for {:?}", cli.username))?;

        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    let policy = if cli.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };

    let summary = fetcher
        .user_events_summary(&cli.username, &Renderer::new(policy))
        .await?;

    // The summary already ends with a newline
    print!("{}", summary);
    Ok(())
}
