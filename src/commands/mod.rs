//! Command dispatch and handlers.

pub mod departments;
pub mod generate;

use crate::cli::{Cli, Command};
use crate::config::{Config, Overrides};
use crate::context::ServiceContext;
use crate::error::Result;

/// Dispatch a parsed command line against the real filesystem.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let ctx = ServiceContext::live();
    let overrides = Overrides {
        config_file: cli.options.config.clone(),
        root: cli.options.root.clone(),
        output: cli.options.output.clone(),
        extensions: cli.options.extensions.clone(),
    };
    let config = Config::resolve(ctx.fs.as_ref(), &overrides, |key| std::env::var(key).ok())?;

    dispatch_with_context(cli.command.unwrap_or_default(), &ctx, &config)
}

/// Dispatch a command with the given service context and configuration.
fn dispatch_with_context(command: Command, ctx: &ServiceContext, config: &Config) -> Result<()> {
    match command {
        Command::Generate { dry_run } => generate::run(ctx, config, dry_run),
        Command::Departments => departments::run(ctx, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryFileSystem;

    #[test]
    fn default_command_writes_manifest() {
        let ctx = ServiceContext::with_fs(Box::new(
            InMemoryFileSystem::new().with_file("images/Math/Roe_Rick.png", ""),
        ));
        dispatch_with_context(Command::default(), &ctx, &Config::default()).unwrap();
        assert!(ctx.fs.exists(std::path::Path::new("data/people.json")));
    }

    #[test]
    fn departments_command_does_not_write() {
        let ctx = ServiceContext::with_fs(Box::new(
            InMemoryFileSystem::new().with_file("images/Math/Roe_Rick.png", ""),
        ));
        dispatch_with_context(Command::Departments, &ctx, &Config::default()).unwrap();
        assert!(!ctx.fs.exists(std::path::Path::new("data/people.json")));
    }
}
