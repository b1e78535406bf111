//! Report command - fetch and display the report card.

use anyhow::Result;
use tracing::info;

use gradecast_core::ReportOutcome;

use crate::commands::build_client;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the report command.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let (client, session) = build_client(cli)?;

    info!("Fetching report card");
    let outcome = client.get_report_card(&session).await;

    print_outcome(&outcome, cli)?;
    Ok(exit_code_for(&outcome))
}

/// Prints an outcome in the selected format. Shared by the report and
/// classwork commands.
pub fn print_outcome(outcome: &ReportOutcome, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(outcome)?);
        }
        OutputFormat::Text => {
            print!("{}", TextFormatter::new(!cli.no_color).format(outcome));
        }
    }
    Ok(())
}

/// Maps an outcome onto the process exit code. The auth case gets its
/// own code so wrappers can prompt for a fresh sign-in instead of
/// retrying.
pub fn exit_code_for(outcome: &ReportOutcome) -> ExitCode {
    match outcome {
        ReportOutcome::Success { .. } => ExitCode::Success,
        ReportOutcome::SessionInvalid => ExitCode::AuthRequired,
        ReportOutcome::UpstreamError { .. } | ReportOutcome::ParseError { .. } => ExitCode::Error,
    }
}
