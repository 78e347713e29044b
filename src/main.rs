use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ghstatus::{ConnectionArgs, ExecArgs, GetArgs, SetArgs};

/// GitHub commit status updater.
#[derive(Debug, Parser)]
#[command(name = "ghstatus", version, about)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Set the status of the commit
    Set(SetArgs),
    /// List the statuses of the commit
    Get(GetArgs),
    /// Run a command, reporting pending and then its result
    Exec(ExecArgs),
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Set(args) => ghstatus::run_set(&cli.connection, args),
        Commands::Get(args) => ghstatus::run_get(&cli.connection, args),
        Commands::Exec(args) => ghstatus::run_exec(&cli.connection, args),
    }
}
