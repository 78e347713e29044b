use std::path::PathBuf;
use std::process::Command;

use crate::domain::RepoSlug;

/// Which commit a status is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub repo: RepoSlug,
    pub sha: String,
}

/// Errors from resolving the repository identity.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum IdentityError {
    #[error("failed to run git: {0}")]
    #[diagnostic(
        code(ghstatus::identity::git_unavailable),
        help("install git or pass --repo and --sha")
    )]
    GitUnavailable(#[source] std::io::Error),
    #[error("`git {args}` failed: {stderr}")]
    #[diagnostic(
        code(ghstatus::identity::git_failed),
        help("run inside a git checkout or pass --repo and --sha")
    )]
    GitFailed { args: String, stderr: String },
    #[error("could not determine {0}")]
    #[diagnostic(code(ghstatus::identity::empty))]
    Empty(&'static str),
}

/// Source of repository metadata when it is not given explicitly.
pub trait Vcs {
    /// Raw URL of the `origin` remote.
    fn origin_url(&self) -> Result<String, IdentityError>;
    /// Full hash of the checked-out commit.
    fn head_sha(&self) -> Result<String, IdentityError>;
}

/// [`Vcs`] implementation that shells out to the `git` binary.
#[derive(Debug, Default)]
pub struct GitCli {
    dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir` instead of the current directory.
    #[cfg(test)]
    fn in_dir(dir: impl Into<PathBuf>) -> Self {
        GitCli {
            dir: Some(dir.into()),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, IdentityError> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        tracing::debug!(args = %args.join(" "), "running git");

        let output = cmd.output().map_err(IdentityError::GitUnavailable)?;
        if !output.status.success() {
            return Err(IdentityError::GitFailed {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Vcs for GitCli {
    fn origin_url(&self) -> Result<String, IdentityError> {
        self.run(&["config", "remote.origin.url"])
    }

    fn head_sha(&self) -> Result<String, IdentityError> {
        self.run(&["rev-parse", "HEAD"])
    }
}

impl Identity {
    /// Resolve repo and sha, preferring explicit values field by field.
    ///
    /// `vcs` is consulted only for the fields left unset; empty strings count
    /// as unset so a blank `GITHUB_REPO=` still falls back to git. Explicit
    /// repos go through the same URL normalization as detected remotes.
    pub fn resolve(
        repo: Option<&str>,
        sha: Option<&str>,
        vcs: &dyn Vcs,
    ) -> Result<Self, IdentityError> {
        let repo = match non_empty(repo) {
            Some(repo) => RepoSlug::from_remote_url(repo),
            None => RepoSlug::from_remote_url(&vcs.origin_url()?),
        };
        if repo.is_empty() {
            return Err(IdentityError::Empty("repository"));
        }

        let sha = match non_empty(sha) {
            Some(sha) => sha.to_string(),
            None => vcs.head_sha()?,
        };
        if sha.is_empty() {
            return Err(IdentityError::Empty("commit sha"));
        }

        Ok(Identity { repo, sha })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
