//! Binary entrypoint for the `roster` CLI.

use std::process::ExitCode;

use roster::RosterError;

fn main() -> ExitCode {
    // A missing .env is fine; ROSTER_* may come from the real environment.
    let _ = dotenvy::dotenv();

    match roster::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RosterError::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
