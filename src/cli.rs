// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool takes one positional argument, the GitHub username, plus a few
// optional flags for output format, payload handling and the API endpoint.
// =============================================================================

use clap::Parser;
use url::Url;

use crate::github::DEFAULT_BASE_URL;

// #[derive(Parser)] tells clap to generate the parsing code for us.
// Doc comments on fields become the --help text.
#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Summarize a GitHub user's recent public activity",
    long_about = "github-activity fetches the most recent public events of a GitHub user \
                  and prints a one-line summary per event, or the raw events as JSON."
)]
pub struct Cli {
    /// GitHub username whose public events to fetch
    ///
    /// Example: github-activity octocat
    pub username: String,

    /// Print the raw event records as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Leave out events whose payload does not match their type instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Root of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Request timeout in seconds (at least 1)
    //
    // A zero timeout would fail every request, so range(1..) turns it into a
    // usage error before the HTTP client is built
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is base_url a Url and not a String?
//    - clap calls Url's FromStr for us, so "not a url" fails at parse time
//    - The rest of the program never has to re-validate it
//
// 2. What does env = "GITHUB_API_URL" do?
//    - If --base-url is not given, clap reads that environment variable
//    - If neither is set, default_value is used
//    - Needs clap's "env" feature (see Cargo.toml)
//
// 3. What is ArgAction::Count?
//    - Each -v adds one, so -vv gives verbose == 2
// -----------------------------------------------------------------------------
