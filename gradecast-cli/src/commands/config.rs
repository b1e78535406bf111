//! Config command - inspect and update the config file.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::{Cli, ExitCode, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Config action to perform.
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,
    /// Print the config file path.
    Path,
    /// Set the portal base URL.
    SetUrl {
        /// Base URL of the district's HAC deployment.
        url: String,
    },
    /// Set the request timeout in seconds.
    SetTimeout {
        /// Timeout in seconds.
        secs: u64,
    },
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli) -> Result<ExitCode> {
    match &args.action {
        ConfigAction::Show => {
            let config = Config::load()?;
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!(
                    "base_url:     {}",
                    config.portal.base_url.as_deref().unwrap_or("(not set)")
                );
                println!("timeout_secs: {}", config.portal.timeout_secs);
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::default_path().display());
        }
        ConfigAction::SetUrl { url } => {
            let mut config = Config::load()?;
            config.portal.base_url = Some(url.clone());
            config.save()?;
            println!("Portal base URL set.");
        }
        ConfigAction::SetTimeout { secs } => {
            let mut config = Config::load()?;
            config.portal.timeout_secs = *secs;
            config.save()?;
            println!("Timeout set to {secs}s.");
        }
    }
    Ok(ExitCode::Success)
}
