use std::process::ExitCode;

use clap::Args;

use super::{resolve_target_url, CliError, ConnectionArgs};
use crate::domain::State;
use crate::protocol::StatusPayload;
use crate::reporter::ReportError;
use crate::wrapper::DEFAULT_CONTEXT;

#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Status state
    #[arg(value_enum)]
    pub state: State,

    /// Label distinguishing this check from others on the same commit
    #[arg(long, default_value = DEFAULT_CONTEXT)]
    pub context: String,

    /// Descriptive status message
    #[arg(long)]
    pub description: Option<String>,

    /// URL to the status
    #[arg(long, env = "TARGET_URL")]
    pub target_url: Option<String>,

    /// Print nothing and ignore API errors
    #[arg(long)]
    pub silent: bool,
}

/// Execute `set`: create one status and print it.
pub fn run(connection: &ConnectionArgs, args: &SetArgs) -> Result<ExitCode, CliError> {
    let reporter = connection.reporter()?;
    let payload = StatusPayload::new(args.state, args.context.clone())
        .with_description(args.description.clone())
        .with_target_url(resolve_target_url(args.target_url.as_deref()));

    match reporter.set(&payload) {
        Ok(_) if args.silent => Ok(ExitCode::SUCCESS),
        Ok(Some(status)) => {
            println!("{}", status.summary_line());
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            tracing::warn!("status accepted, but the API response did not describe it");
            Ok(ExitCode::SUCCESS)
        }
        Err(ReportError::Api { status, .. }) if args.silent => {
            tracing::debug!(status, "ignoring API error in silent mode");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if let Some(body) = e.api_body() {
                eprintln!("{body}");
            }
            Err(e.into())
        }
    }
}
