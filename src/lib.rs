pub(crate) mod cli;
pub mod config;
pub(crate) mod domain;
pub mod identity;
pub mod protocol;
pub mod reporter;
pub mod wrapper;

use std::process::ExitCode;

pub use cli::{exec::ExecArgs, get::GetArgs, set::SetArgs, ConnectionArgs};
pub use domain::{RepoSlug, State};

/// Run the `set` subcommand and map its result to an exit code.
///
/// These entry points bridge the binary crate (`main.rs`) to the library.
/// Library callers should use [`reporter::Reporter`] directly.
pub fn run_set(connection: &ConnectionArgs, args: &SetArgs) -> ExitCode {
    cli::finish(cli::set::run(connection, args))
}

/// Run the `get` subcommand and map its result to an exit code.
pub fn run_get(connection: &ConnectionArgs, args: &GetArgs) -> ExitCode {
    cli::finish(cli::get::run(connection, args))
}

/// Run the `exec` subcommand and map its result to an exit code.
pub fn run_exec(connection: &ConnectionArgs, args: &ExecArgs) -> ExitCode {
    cli::finish(cli::exec::run(connection, args))
}
