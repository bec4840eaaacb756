//! Core library entry for the `roster` CLI.
//!
//! `roster` scans an image tree laid out as `<root>/<department>/<Last_First>.<ext>`
//! and writes a JSON manifest of the people it finds.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod departments;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod names;
pub mod ports;
pub mod walker;

pub use error::{Result, RosterError};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`RosterError::Cli`] when argument parsing fails (including
/// `--help` and `--version`), or the error of the command that ran.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    logging::init(cli.options.verbose);
    commands::dispatch(&cli)
}
