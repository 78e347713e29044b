use std::io::ErrorKind;
use std::process::Command;

use crate::domain::State;

/// How a wrapped command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exited with code 0.
    Succeeded,
    /// Exited non-zero, or was killed by a signal (`code` is `None`).
    Failed { code: Option<i32> },
    /// The program could not be found on `PATH`.
    NotFound { program: String },
    /// Anything else that kept the program from running.
    Fault { message: String },
}

impl Outcome {
    /// Terminal status reported for this outcome.
    pub fn state(&self) -> State {
        match self {
            Outcome::Succeeded => State::Success,
            Outcome::Failed { .. } => State::Failure,
            Outcome::NotFound { .. } | Outcome::Fault { .. } => State::Error,
        }
    }

    /// Exit code for this process: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Succeeded => 0,
            _ => 1,
        }
    }
}

/// Run `argv` in the foreground and wait for it.
///
/// The child inherits stdin, stdout and stderr. There is no timeout.
pub(crate) fn run(argv: &[String]) -> Outcome {
    let Some((program, args)) = argv.split_first() else {
        return Outcome::Fault {
            message: "no command given".to_string(),
        };
    };

    tracing::debug!(%program, ?args, "spawning wrapped command");
    match Command::new(program).args(args).status() {
        Ok(status) if status.success() => Outcome::Succeeded,
        Ok(status) => Outcome::Failed {
            code: status.code(),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Outcome::NotFound {
            program: program.clone(),
        },
        Err(e) => Outcome::Fault {
            message: format!("{program}: {e}"),
        },
    }
}
