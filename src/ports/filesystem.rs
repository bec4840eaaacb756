//! Filesystem port for file I/O operations.

use std::io;
use std::path::Path;

/// Kind of a directory entry as reported by [`FileSystem::list_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory (symlinks are followed).
    Directory,
    /// A regular file (symlinks are followed).
    File,
    /// Anything else: sockets, broken symlinks, device nodes.
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry, without its parent path.
    pub name: String,
    /// What the entry points at.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Builds an entry.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }

    /// Returns `true` if the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns `true` if the entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Provides filesystem access for reading and writing files.
///
/// Abstracting the filesystem lets the scan and write stages run against an
/// in-memory tree in tests without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replaces the file at `path` with `contents`.
    ///
    /// Implementations must not leave a half-written file behind: either the
    /// new contents are in place or the previous file is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Creates `path` and all missing ancestors. Succeeds if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists the entries in a directory, in the order the adapter defines.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}
