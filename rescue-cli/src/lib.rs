//! Command-line interface for planning rescue routes from JSON requests.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod solve;

pub use error::CliError;

use solve::SolveArgs;

const ARG_SOLVE_REQUEST: &str = "request-path";
const ARG_SOLVE_OUTPUT: &str = "output";
const ARG_SOLVE_MERGE_COLOCATED: &str = "merge-colocated-survivors";
const ARG_SOLVE_REUSE_TREES: &str = "reuse-search-trees";
const ENV_SOLVE_REQUEST: &str = "RESCUE_CMDS_SOLVE_REQUEST_PATH";

/// Run the rescue CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// request cannot be read or fails validation, or the plan cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "rescue",
    about = "Plan multi-vehicle rescue routes over a road network",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan routes for a JSON-encoded plan request.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
