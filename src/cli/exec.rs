use std::process::ExitCode;

use clap::Args;

use super::{resolve_target_url, CliError, ConnectionArgs};
use crate::wrapper::{
    self, Messages, WrapOptions, DEFAULT_CONTEXT, DEFAULT_ERROR_MESSAGE, DEFAULT_FAILURE_MESSAGE,
    DEFAULT_PENDING_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};

#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Label distinguishing this check from others on the same commit
    #[arg(long, default_value = DEFAULT_CONTEXT)]
    pub context: String,

    /// URL to the status
    #[arg(long, env = "TARGET_URL")]
    pub target_url: Option<String>,

    /// Pending message
    #[arg(long, default_value = DEFAULT_PENDING_MESSAGE)]
    pub pending: String,

    /// Success message
    #[arg(long, default_value = DEFAULT_SUCCESS_MESSAGE)]
    pub success: String,

    /// Failure message
    #[arg(long, default_value = DEFAULT_FAILURE_MESSAGE)]
    pub failure: String,

    /// Error message
    #[arg(long, default_value = DEFAULT_ERROR_MESSAGE)]
    pub error: String,

    /// Command to run, with its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl ExecArgs {
    fn options(&self) -> WrapOptions {
        WrapOptions {
            context: self.context.clone(),
            target_url: resolve_target_url(self.target_url.as_deref()),
            messages: Messages {
                pending: self.pending.clone(),
                success: self.success.clone(),
                failure: self.failure.clone(),
                error: self.error.clone(),
            },
        }
    }
}

/// Execute `exec`: wrap the command in pending and terminal statuses.
///
/// Identity and config problems abort before the command runs. Once it has
/// started, the exit code depends only on how the command ended.
pub fn run(connection: &ConnectionArgs, args: &ExecArgs) -> Result<ExitCode, CliError> {
    let reporter = connection.reporter()?;
    let outcome = wrapper::run_wrapped(&reporter, &args.options(), &args.command);
    Ok(ExitCode::from(outcome.exit_code()))
}
