use serde::{Deserialize, Serialize};

/// Commit status state accepted by the status API.
///
/// Serialized lowercase both on the wire and on the command line,
/// so `State::Pending` is `"pending"` everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Error,
    Failure,
    Pending,
    Success,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Error => "error",
            State::Failure => "failure",
            State::Pending => "pending",
            State::Success => "success",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
