//! In-memory adapter for the `FileSystem` port.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::{DirEntry, EntryKind, FileSystem};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
}

#[derive(Default)]
struct State {
    /// Insertion-ordered so listings reflect the order entries were added.
    nodes: Vec<(PathBuf, Node)>,
    denied: HashSet<PathBuf>,
}

impl State {
    fn find(&self, path: &Path) -> Option<&Node> {
        self.nodes.iter().find(|(p, _)| p == path).map(|(_, n)| n)
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn ensure_dir(&mut self, path: &Path) -> io::Result<()> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }
        match self.find(path) {
            Some(Node::Dir) => Ok(()),
            Some(Node::File(_)) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("not a directory: {}", path.display()),
            )),
            None => {
                self.check(path)?;
                self.nodes.push((path.to_path_buf(), Node::Dir));
                Ok(())
            }
        }
    }
}

/// Filesystem held entirely in memory.
///
/// Directory listings come back in insertion order, which makes it possible
/// to check that callers do not depend on any particular order. Paths can be
/// marked as denied to simulate permission failures.
#[derive(Default)]
pub struct InMemoryFileSystem {
    state: Mutex<State>,
}

impl InMemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory (and its ancestors).
    ///
    /// # Panics
    ///
    /// Panics if a file already sits where a directory is needed.
    #[must_use]
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.lock().ensure_dir(path.as_ref()).expect("with_dir: conflicting node");
        self
    }

    /// Adds a file (and its ancestor directories).
    ///
    /// # Panics
    ///
    /// Panics if a file already sits where an ancestor directory is needed.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref();
        {
            let mut state = self.lock();
            if let Some(parent) = path.parent() {
                state.ensure_dir(parent).expect("with_file: conflicting node");
            }
            state.nodes.retain(|(p, _)| p != path);
            state.nodes.push((path.to_path_buf(), Node::File(contents.to_string())));
        }
        self
    }

    /// Makes every operation touching exactly `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn with_denied(self, path: impl AsRef<Path>) -> Self {
        self.lock().denied.insert(path.as_ref().to_path_buf());
        self
    }

    /// Returns the contents of a file, if present.
    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.lock().find(path.as_ref()) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("in-memory fs lock poisoned")
    }
}

impl FileSystem for InMemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self.lock();
        state.check(path)?;
        match state.find(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Dir) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut state = self.lock();
        state.check(path)?;
        let parent_ok = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                matches!(state.find(parent), Some(Node::Dir))
            }
            _ => true,
        };
        if !parent_ok {
            return Err(not_found(path));
        }
        if matches!(state.find(path), Some(Node::Dir)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            ));
        }
        state.nodes.retain(|(p, _)| p != path);
        state.nodes.push((path.to_path_buf(), Node::File(contents.to_string())));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.lock().ensure_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().find(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lock().find(path), Some(Node::Dir))
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let state = self.lock();
        state.check(path)?;
        match state.find(path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a directory: {}", path.display()),
                ))
            }
            None => return Err(not_found(path)),
        }
        Ok(state
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, node)| {
                let name = p.file_name()?.to_str()?;
                let kind = match node {
                    Node::Dir => EntryKind::Directory,
                    Node::File(_) => EntryKind::File,
                };
                Some(DirEntry::new(name, kind))
            })
            .collect())
    }
}

fn not_found(path: &Path) -> io::Error {
    let msg = format!("no such file or directory: {}", path.display());
    io::Error::new(io::ErrorKind::NotFound, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_keeps_insertion_order() {
        let fs = InMemoryFileSystem::new()
            .with_file("images/Science/b.png", "")
            .with_file("images/Science/a.png", "");
        let names: Vec<String> = fs
            .list_dir(Path::new("images/Science"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["b.png", "a.png"]);
    }

    #[test]
    fn with_file_creates_ancestors() {
        let fs = InMemoryFileSystem::new().with_file("images/Math/x.jpg", "");
        assert!(fs.is_dir(Path::new("images")));
        assert!(fs.is_dir(Path::new("images/Math")));
        assert!(!fs.is_dir(Path::new("images/Math/x.jpg")));
    }

    #[test]
    fn write_requires_existing_parent() {
        let fs = InMemoryFileSystem::new();
        assert!(fs.write(Path::new("data/people.json"), "[]").is_err());
        fs.create_dir_all(Path::new("data")).unwrap();
        fs.write(Path::new("data/people.json"), "[]").unwrap();
        assert_eq!(fs.file("data/people.json").as_deref(), Some("[]"));
    }

    #[test]
    fn denied_path_fails() {
        let fs = InMemoryFileSystem::new().with_dir("images/HR").with_denied("images/HR");
        let err = fs.list_dir(Path::new("images/HR")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
