use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::Config;
use crate::identity::Identity;
use crate::protocol::{CombinedStatus, Status, StatusPayload};

const USER_AGENT: &str = concat!("ghstatus/", env!("CARGO_PKG_VERSION"));
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Errors from talking to the status API.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReportError {
    #[error("failed to build HTTP client: {0}")]
    #[diagnostic(code(ghstatus::report::client))]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    #[diagnostic(
        code(ghstatus::report::transport),
        help("check --base-url / GITHUB_URL and network access")
    )]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API returned HTTP {status}")]
    #[diagnostic(code(ghstatus::report::api))]
    Api { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    #[diagnostic(code(ghstatus::report::decode))]
    Decode(#[source] serde_json::Error),
}

impl ReportError {
    /// Response body of a rejected request, if any.
    pub fn api_body(&self) -> Option<&str> {
        match self {
            ReportError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Anything that can record a commit status.
///
/// The command wrapper only needs this, which keeps it testable without a
/// network.
pub trait StatusSink {
    fn set(&self, payload: &StatusPayload) -> Result<Option<Status>, ReportError>;
}

/// Blocking client for one repository commit.
pub struct Reporter {
    client: Client,
    config: Config,
    identity: Identity,
}

impl Reporter {
    pub fn new(config: Config, identity: Identity) -> Result<Self, ReportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(ReportError::Client)?;

        Ok(Reporter {
            client,
            config,
            identity,
        })
    }

    /// `POST` endpoint for creating a status on the resolved commit.
    pub fn statuses_url(&self) -> String {
        format!(
            "{}/repos/{}/statuses/{}",
            self.config.base_url, self.identity.repo, self.identity.sha
        )
    }

    /// `GET` endpoint for the combined status of the resolved commit.
    pub fn combined_status_url(&self) -> String {
        format!(
            "{}/repos/{}/commits/{}/status",
            self.config.base_url, self.identity.repo, self.identity.sha
        )
    }

    /// Create a status on the resolved commit and return what the API stored.
    ///
    /// Any 2xx answer means the status was created. The stored status is
    /// `None` when the body of that answer is empty or not a status object.
    pub fn set(&self, payload: &StatusPayload) -> Result<Option<Status>, ReportError> {
        let url = self.statuses_url();
        tracing::debug!(%url, state = %payload.state, context = %payload.context, "setting status");
        let request = self.client.post(&url).json(payload);
        let body = self.send(request, &url)?;
        match serde_json::from_str(&body) {
            Ok(status) => Ok(Some(status)),
            Err(e) => {
                tracing::debug!(%url, "unreadable status in response body: {e}");
                Ok(None)
            }
        }
    }

    /// List all statuses currently attached to the resolved commit.
    pub fn get(&self) -> Result<Vec<Status>, ReportError> {
        let url = self.combined_status_url();
        tracing::debug!(%url, "fetching combined status");
        let request = self.client.get(&url);
        let body = self.send(request, &url)?;
        let combined: CombinedStatus = serde_json::from_str(&body).map_err(ReportError::Decode)?;
        Ok(combined.statuses)
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<String, ReportError> {
        let request = match &self.config.credentials {
            Some(creds) => request.basic_auth(&creds.username, creds.password.as_ref()),
            None => request,
        };

        let response = request.send().map_err(|source| ReportError::Transport {
            url: url.to_string(),
            source,
        })?;
        read_body(response, url)
    }
}

impl StatusSink for Reporter {
    fn set(&self, payload: &StatusPayload) -> Result<Option<Status>, ReportError> {
        Reporter::set(self, payload)
    }
}

/// Read the response body, turning HTTP >= 400 into [`ReportError::Api`].
fn read_body(response: Response, url: &str) -> Result<String, ReportError> {
    let status = response.status();
    let body = response.text().map_err(|source| ReportError::Transport {
        url: url.to_string(),
        source,
    })?;

    if status.is_client_error() || status.is_server_error() {
        tracing::debug!(%url, status = status.as_u16(), "API rejected request");
        return Err(ReportError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
