//! Command wrapper: report pending, run a command, report how it ended.
//!
//! Status updates here are best effort: a failed API call is logged and
//! never changes the outcome.

mod process;

pub use process::Outcome;

use crate::domain::State;
use crate::protocol::StatusPayload;
use crate::reporter::StatusSink;

pub const DEFAULT_CONTEXT: &str = "default";
pub const DEFAULT_PENDING_MESSAGE: &str = "Tests in progress";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Tests pass!";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Tests failed";
pub const DEFAULT_ERROR_MESSAGE: &str = "Cannot run tests";

/// Description sent with each state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub pending: String,
    pub success: String,
    pub failure: String,
    pub error: String,
}

impl Messages {
    pub fn for_state(&self, state: State) -> &str {
        match state {
            State::Pending => &self.pending,
            State::Success => &self.success,
            State::Failure => &self.failure,
            State::Error => &self.error,
        }
    }
}

/// Settings shared by every status a wrapped run reports.
#[derive(Debug, Clone)]
pub struct WrapOptions {
    pub context: String,
    pub target_url: Option<String>,
    pub messages: Messages,
}

/// Report pending, run `argv`, then report exactly one terminal state.
///
/// Returns the outcome so the caller can pick the process exit code.
pub fn run_wrapped(sink: &dyn StatusSink, options: &WrapOptions, argv: &[String]) -> Outcome {
    report(sink, options, State::Pending);

    let outcome = process::run(argv);
    match &outcome {
        Outcome::Succeeded => {}
        Outcome::Failed { code: Some(code) } => {
            tracing::error!("Command failed with exit code: {code}");
        }
        Outcome::Failed { code: None } => tracing::error!("Command terminated by signal"),
        Outcome::NotFound { program } => tracing::error!("Command not found: {program}"),
        Outcome::Fault { message } => tracing::error!("Cannot run command: {message}"),
    }

    report(sink, options, outcome.state());
    outcome
}

fn report(sink: &dyn StatusSink, options: &WrapOptions, state: State) {
    tracing::info!("{} -> {}", options.context, state);

    let payload = StatusPayload::new(state, options.context.clone())
        .with_description(Some(options.messages.for_state(state).to_string()))
        .with_target_url(options.target_url.clone());

    if let Err(e) = sink.set(&payload) {
        tracing::warn!(%state, "failed to report status: {e}");
    }
}
