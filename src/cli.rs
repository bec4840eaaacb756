//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `roster`.
#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Generate the people manifest from a department image tree"
)]
pub struct Cli {
    /// Options shared by every command.
    #[command(flatten)]
    pub options: GlobalOptions,
    /// The command to execute; `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options accepted before or after any subcommand.
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// YAML config file (defaults to `roster.yaml` when present).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Image root whose subdirectories are departments.
    #[arg(short, long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Manifest output path.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Recognized image extension; repeat or comma-separate to list several.
    #[arg(short = 'e', long = "ext", global = true, value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,
    /// Log each discovered and skipped entry.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Supported subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Scan the image tree and write the manifest.
    Generate {
        /// Print the manifest to stdout instead of writing it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the departments found in the image tree with their head counts.
    Departments,
}

impl Default for Command {
    fn default() -> Self {
        Self::Generate { dry_run: false }
    }
}
