//! Storyline CLI
//!
//! Prints a colorized report of recently updated tracker stories.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use storyline_tracker::{Reporter, TrackerClient};

#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(about = "Print recently updated tracker stories", long_about = None)]
struct Args {
    /// Tracker API base URL
    #[arg(
        long,
        default_value = "https://www.pivotaltracker.com/services/v5",
        env = "STORYLINE_BASE_URL"
    )]
    base_url: String,

    /// API token, sent as the X-TrackerToken header
    #[arg(long, env = "STORYLINE_TOKEN", hide_env_values = true)]
    token: String,

    /// Project id to report on
    #[arg(long, env = "STORYLINE_PROJECT")]
    project: u64,

    /// Lookback window in days
    #[arg(short, long, default_value_t = 14)]
    days: i64,

    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,

    /// Log level filter (e.g. "debug" or "storyline_tracker=trace")
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode into the global `colored` override. Auto follows
    /// the NO_COLOR convention and whether stdout is a terminal.
    fn apply(self) {
        let enable = match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        colored::control::set_override(enable);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the report itself stays clean on stdout. Note
    // that debug level logs every request URL.
    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();

    args.color.apply();

    let client = TrackerClient::new(args.base_url, args.token, args.project)
        .context("failed to build tracker client")?;
    let reporter = Reporter::new(Arc::new(client));

    let lines = reporter
        .run(args.days)
        .await
        .context("failed to fetch the activity report")?;
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
