use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::State;

/// A single commit status as returned by the API.
///
/// The fields this tool prints are typed; everything else the API sends
/// (ids, creators, timestamps) is kept in `extra` and written back out
/// unchanged when the status is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub state: State,
    pub context: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Status {
    /// One-line rendering: `<state> <context> <target_url>`.
    ///
    /// The URL column is dropped when the status has none.
    pub fn summary_line(&self) -> String {
        match &self.target_url {
            Some(url) => format!("{} {} {}", self.state, self.context, url),
            None => format!("{} {}", self.state, self.context),
        }
    }
}

/// Body of the combined status endpoint for a commit.
#[derive(Debug, Clone, Deserialize)]
pub struct CombinedStatus {
    #[serde(default)]
    pub statuses: Vec<Status>,
}
