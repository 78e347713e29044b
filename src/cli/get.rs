use std::process::ExitCode;

use clap::Args;

use super::{CliError, ConnectionArgs};
use crate::protocol::Status;
use crate::reporter::ReportError;

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Only list statuses with this context
    #[arg(long)]
    pub context: Option<String>,

    /// Print statuses as a JSON array
    #[arg(long, overrides_with = "no_json")]
    pub json: bool,

    /// Print one `<state> <context> <target_url>` line per status (default)
    #[arg(long = "no-json", overrides_with = "json")]
    pub no_json: bool,

    /// Print nothing and ignore API errors
    #[arg(long)]
    pub silent: bool,
}

/// Keep only statuses matching `context`, or all when no filter is set.
pub fn filter_by_context(statuses: Vec<Status>, context: Option<&str>) -> Vec<Status> {
    match context {
        Some(context) => statuses
            .into_iter()
            .filter(|s| s.context == context)
            .collect(),
        None => statuses,
    }
}

/// Execute `get`: list the statuses of the resolved commit.
pub fn run(connection: &ConnectionArgs, args: &GetArgs) -> Result<ExitCode, CliError> {
    let reporter = connection.reporter()?;

    let statuses = match reporter.get() {
        Ok(statuses) => statuses,
        Err(ReportError::Api { status, .. }) if args.silent => {
            tracing::debug!(status, "ignoring API error in silent mode");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            if let Some(body) = e.api_body() {
                eprintln!("{body}");
            }
            return Err(e.into());
        }
    };

    if args.silent {
        return Ok(ExitCode::SUCCESS);
    }

    let statuses = filter_by_context(statuses, args.context.as_deref());
    if args.json {
        output_json(&statuses);
    } else {
        for status in &statuses {
            println!("{}", status.summary_line());
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Serialize statuses to pretty JSON and print to stdout.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with the derived
/// `Serialize` impl on strings, options and enums.
fn output_json(statuses: &[Status]) {
    let json = serde_json::to_string_pretty(statuses).expect("Status serialization cannot fail");
    println!("{json}");
}
