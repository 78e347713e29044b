pub mod exec;
pub mod get;
pub mod set;

use std::process::ExitCode;

use clap::Args;

use crate::config::{ci_target_url, process_env, Config, ConfigError, DEFAULT_BASE_URL};
use crate::identity::{GitCli, Identity, IdentityError};
use crate::reporter::{ReportError, Reporter};

/// API connection and commit selection, shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// GitHub API URL
    #[arg(long, env = "GITHUB_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// GitHub API username
    #[arg(short = 'u', long, env = "GITHUB_USERNAME", global = true)]
    pub username: Option<String>,

    /// GitHub API password or token
    #[arg(short = 'p', long, env = "GITHUB_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Repository as owner/name (default: origin remote of the current checkout)
    #[arg(long, env = "GITHUB_REPO", global = true)]
    pub repo: Option<String>,

    /// Commit hash (default: HEAD of the current checkout)
    #[arg(long, env = "GITHUB_SHA", global = true)]
    pub sha: Option<String>,
}

impl ConnectionArgs {
    /// Build a reporter, resolving identity from git where not given.
    pub fn reporter(&self) -> Result<Reporter, CliError> {
        let config = Config::new(&self.base_url, self.username.clone(), self.password.clone())?;
        let identity =
            Identity::resolve(self.repo.as_deref(), self.sha.as_deref(), &GitCli::new())?;
        tracing::debug!(
            repo = %identity.repo,
            sha = %identity.sha,
            base_url = %config.base_url,
            "resolved identity"
        );
        Ok(Reporter::new(config, identity)?)
    }
}

/// Top-level failure of a subcommand.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),
}

/// Explicit target URL, or the one the CI environment provides.
pub(crate) fn resolve_target_url(explicit: Option<&str>) -> Option<String> {
    explicit
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| ci_target_url(process_env))
}

/// Map a subcommand result to the process exit code, rendering errors.
pub(crate) fn finish(result: Result<ExitCode, CliError>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}
