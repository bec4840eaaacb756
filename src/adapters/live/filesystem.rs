//! Live filesystem adapter using `std::fs`.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::{DirEntry, EntryKind, FileSystem};

/// Live filesystem adapter backed by real disk I/O.
///
/// Directory listings are sorted by name so that repeated runs over the same
/// tree produce the same order on every platform.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let tmp = temp_sibling(path);
        if let Err(err) = std::fs::write(&tmp, contents) {
            let _ = std::fs::remove_file(&tmp);
            return Err(err);
        }
        std::fs::rename(&tmp, path).inspect_err(|_| {
            let _ = std::fs::remove_file(&tmp);
        })
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!(
                    path = %entry.path().display(),
                    "skipping entry with a non UTF-8 name"
                );
                continue;
            };
            // `metadata` follows symlinks, unlike `DirEntry::file_type`.
            let kind = match std::fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                Ok(meta) if meta.is_file() => EntryKind::File,
                Ok(_) => EntryKind::Other,
                // Broken symlink.
                Err(err) if err.kind() == io::ErrorKind::NotFound => EntryKind::Other,
                Err(err) => return Err(err),
            };
            entries.push(DirEntry::new(name, kind));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// `people.json` -> `.people.json.tmp` in the same directory, so the final
/// rename never crosses a filesystem boundary.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| path.as_os_str()));
    name.push(".tmp");
    path.with_file_name(name)
}
