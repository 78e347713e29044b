mod ci;

pub use ci::{ci_target_url, process_env};

/// Public GitHub API endpoint, used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Connection settings for the status API.
///
/// Built once from flags and environment; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root without a trailing slash.
    pub base_url: String,
    pub credentials: Option<Credentials>,
}

/// Basic-auth credentials. The password may be a personal access token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

/// Errors that can occur when building a config.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    #[diagnostic(code(ghstatus::config::invalid_base_url))]
    InvalidBaseUrl { url: String, reason: String },
}

impl Config {
    /// Validate and normalize connection settings.
    ///
    /// A blank `base_url` (e.g. `GITHUB_URL=`) means [`DEFAULT_BASE_URL`].
    /// Trailing slashes are dropped so endpoint paths can be appended
    /// verbatim. Credentials are attached when either a username or a
    /// password is present; a token alone gets an empty username.
    pub fn new(
        base_url: &str,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ConfigError> {
        let trimmed = match base_url.trim().trim_end_matches('/') {
            "" => DEFAULT_BASE_URL,
            url => url,
        };

        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: trimmed.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let credentials = match (username, password) {
            (None, None) => None,
            (username, password) => Some(Credentials {
                username: username.unwrap_or_default(),
                password,
            }),
        };

        Ok(Config {
            base_url: trimmed.to_string(),
            credentials,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
