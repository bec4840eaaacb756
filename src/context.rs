//! Service context bundling all port trait objects.

use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects handed to commands.
///
/// Constructors wire up different adapter implementations: the real disk
/// for the binary, an in-memory tree for tests.
pub struct ServiceContext {
    /// Filesystem for directory listing and file I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::LiveFileSystem;

        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context around the given filesystem adapter.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs }
    }
}
