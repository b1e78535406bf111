// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Gradecast CLI - report cards from Home Access Center portals.
//!
//! # Examples
//!
//! ```bash
//! # Fetch the report card (session from GRADECAST_SESSION)
//! gradecast report
//!
//! # Per-assignment breakdown
//! gradecast classwork
//!
//! # Just check whether the session is still live
//! gradecast check
//!
//! # JSON output for scripting
//! gradecast report --format json --pretty
//!
//! # One-off portal override
//! gradecast report --base-url https://hac.example.org
//! ```

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check, classwork, report};

// ============================================================================
// CLI Definition
// ============================================================================

/// Gradecast CLI - report cards from Home Access Center portals.
#[derive(Parser)]
#[command(name = "gradecast")]
#[command(about = "Fetch report cards from a Home Access Center portal")]
#[command(long_about = r#"
Gradecast fetches and parses report cards from a Home Access Center
(HAC) school portal using an existing session token.

The session token comes from the portal's own sign-in flow (copy the
ASP.NET_SessionId cookie from a signed-in browser). Gradecast never
signs in for you and never stores the token.

Examples:
  gradecast report                    # Report card for the session
  gradecast classwork                 # Per-assignment breakdown
  gradecast check                     # Is the session still live?
  gradecast report --format json      # JSON output
  gradecast config show               # Show effective configuration
"#)]
#[command(version)]
#[command(author = "Gradecast Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'report' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Portal base URL (overrides the config file).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Session token (overrides the GRADECAST_SESSION environment
    /// variable). Prefer the environment variable: flags leak into
    /// shell history and process listings.
    #[arg(long, global = true)]
    pub session: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the report card (default if no command specified).
    #[command(visible_alias = "r")]
    Report,

    /// Fetch the per-assignment classwork breakdown.
    #[command(visible_alias = "cw")]
    Classwork,

    /// Check whether the session still grants access.
    Check,

    /// Manage configuration.
    Config(commands::config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// Generic failure (portal unreachable, markup changed, ...).
    Error = 1,
    /// The session no longer grants access; sign in again.
    AuthRequired = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("gradecast=debug,info")
    } else {
        EnvFilter::new("gradecast=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Report) | None => report::run(&cli).await,
        Some(Commands::Classwork) => classwork::run(&cli).await,
        Some(Commands::Check) => check::run(&cli).await,
        Some(Commands::Config(args)) => commands::config::run(args, &cli),
    };

    match result {
        Ok(code) => std::process::exit(code as i32),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(ExitCode::Error as i32);
        }
    }
}
