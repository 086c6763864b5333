//! Entry point for the `rescue` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() -> ExitCode {
    match rescue_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rescue: {err}");
            ExitCode::FAILURE
        }
    }
}
