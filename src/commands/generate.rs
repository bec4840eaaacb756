//! `roster generate` command.

use std::path::Path;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::manifest::{generator, writer};

/// Execute the `generate` command.
///
/// Scans the tree, writes the manifest and prints a one-line summary. With
/// `dry_run` the manifest goes to stdout and nothing is written; the summary
/// then goes to stderr so stdout stays valid JSON.
///
/// # Errors
///
/// Returns an error if the scan or the write fails.
pub fn run(ctx: &ServiceContext, config: &Config, dry_run: bool) -> Result<()> {
    let records = generator::generate(ctx, config)?;

    if dry_run {
        print!("{}", writer::render_manifest(&records)?);
        eprintln!("Dry run: {} would contain {} entries", config.output.display(), records.len());
        return Ok(());
    }

    let count = writer::write_manifest(ctx.fs.as_ref(), &config.output, &records)?;
    println!("{}", summary_line(&config.output, count));
    Ok(())
}

/// The line printed after a successful write.
#[must_use]
pub fn summary_line(path: &Path, count: usize) -> String {
    format!("Generated {} with {count} entries", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryFileSystem;
    use crate::manifest::ImageRecord;

    fn tree() -> InMemoryFileSystem {
        InMemoryFileSystem::new()
            .with_file("images/Engineering/Amato_Daniel.png", "")
            .with_file("images/Engineering/readme.txt", "")
            .with_file("images/English/Austen_Jane.jpg", "")
    }

    #[test]
    fn summary_line_format() {
        assert_eq!(
            summary_line(Path::new("data/people.json"), 3),
            "Generated data/people.json with 3 entries"
        );
    }

    #[test]
    fn writes_manifest_with_every_image() {
        let ctx = ServiceContext::with_fs(Box::new(tree()));
        run(&ctx, &Config::default(), false).unwrap();

        let json = ctx.fs.read_to_string(Path::new("data/people.json")).unwrap();
        let records: Vec<ImageRecord> = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Daniel Amato", "Jane Austen"]);
    }

    #[test]
    fn second_run_is_byte_identical() {
        let ctx = ServiceContext::with_fs(Box::new(tree()));
        run(&ctx, &Config::default(), false).unwrap();
        let first = ctx.fs.read_to_string(Path::new("data/people.json")).unwrap();
        run(&ctx, &Config::default(), false).unwrap();
        let second = ctx.fs.read_to_string(Path::new("data/people.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let ctx = ServiceContext::with_fs(Box::new(tree()));
        run(&ctx, &Config::default(), true).unwrap();
        assert!(!ctx.fs.exists(Path::new("data")));
    }

    #[test]
    fn empty_tree_writes_empty_array() {
        let ctx = ServiceContext::with_fs(Box::new(InMemoryFileSystem::new().with_dir("images")));
        run(&ctx, &Config::default(), false).unwrap();
        assert_eq!(ctx.fs.read_to_string(Path::new("data/people.json")).unwrap(), "[]\n");
    }

    #[test]
    fn missing_root_leaves_previous_manifest() {
        let ctx = ServiceContext::with_fs(Box::new(
            InMemoryFileSystem::new().with_file("data/people.json", "previous"),
        ));
        assert!(run(&ctx, &Config::default(), false).is_err());
        assert_eq!(ctx.fs.read_to_string(Path::new("data/people.json")).unwrap(), "previous");
    }
}
