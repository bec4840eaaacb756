//! Department tree traversal.
//!
//! The root's immediate subdirectories are departments; the image files
//! directly inside each department are people. Nothing deeper is visited.

use std::path::{Path, PathBuf};

use crate::config::ExtensionSet;
use crate::error::{Result, RosterError};
use crate::ports::filesystem::{DirEntry, FileSystem};

/// One recognized image found under a department directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Name of the department directory.
    pub category: String,
    /// File name as it appears on disk, extension included.
    pub file_name: String,
}

impl ImageEntry {
    /// File name without its final extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        Path::new(&self.file_name).file_stem().and_then(|s| s.to_str()).unwrap_or_default()
    }
}

/// Lazy iterator over `(department, image)` pairs.
///
/// Yields entries in the order the filesystem port lists them. The first
/// traversal error is yielded once and then iteration ends.
pub struct TreeWalker<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
    extensions: &'a ExtensionSet,
    categories: std::vec::IntoIter<DirEntry>,
    current: Option<(String, std::vec::IntoIter<DirEntry>)>,
    finished: bool,
}

impl<'a> TreeWalker<'a> {
    /// Starts a walk over `root`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Configuration`] if `root` does not exist or is
    /// not a directory, and [`RosterError::Io`] if it cannot be listed.
    pub fn new(fs: &'a dyn FileSystem, root: &Path, extensions: &'a ExtensionSet) -> Result<Self> {
        if !fs.exists(root) {
            return Err(RosterError::Configuration(format!(
                "image root {} does not exist",
                root.display()
            )));
        }
        if !fs.is_dir(root) {
            return Err(RosterError::Configuration(format!(
                "image root {} is not a directory",
                root.display()
            )));
        }
        let categories = fs.list_dir(root).map_err(|e| RosterError::io(root, e))?;
        tracing::debug!(root = %root.display(), entries = categories.len(), "listed image root");

        Ok(Self {
            fs,
            root: root.to_path_buf(),
            extensions,
            categories: categories.into_iter(),
            current: None,
            finished: false,
        })
    }

    /// Advances to the next department directory, listing its contents.
    fn open_next_category(&mut self) -> Option<Result<()>> {
        loop {
            let entry = self.categories.next()?;
            if !entry.is_dir() {
                tracing::debug!(entry = %entry.name, "skipping non-directory at image root");
                continue;
            }
            let dir = self.root.join(&entry.name);
            return Some(match self.fs.list_dir(&dir) {
                Ok(files) => {
                    tracing::debug!(
                        department = %entry.name,
                        entries = files.len(),
                        "listed department"
                    );
                    self.current = Some((entry.name, files.into_iter()));
                    Ok(())
                }
                Err(e) => Err(RosterError::io(dir, e)),
            });
        }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = Result<ImageEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some((category, files)) = &mut self.current {
                for file in files.by_ref() {
                    if !file.is_file() {
                        tracing::debug!(department = %category, entry = %file.name, "skipping");
                        continue;
                    }
                    if !self.extensions.matches(&file.name) {
                        tracing::debug!(
                            department = %category,
                            file = %file.name,
                            "skipping unrecognized extension"
                        );
                        continue;
                    }
                    return Some(Ok(ImageEntry {
                        category: category.clone(),
                        file_name: file.name,
                    }));
                }
                self.current = None;
            }

            match self.open_next_category() {
                Some(Ok(())) => {}
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryFileSystem;

    fn collect(fs: &InMemoryFileSystem, exts: &ExtensionSet) -> Vec<(String, String)> {
        TreeWalker::new(fs, Path::new("images"), exts)
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (e.category, e.file_name)
            })
            .collect()
    }

    fn pair(category: &str, file: &str) -> (String, String) {
        (category.to_string(), file.to_string())
    }

    #[test]
    fn yields_images_per_department() {
        let fs = InMemoryFileSystem::new()
            .with_file("images/Engineering/Amato_Daniel.png", "")
            .with_file("images/Science/Curie_Marie.jpg", "");
        let found = collect(&fs, &ExtensionSet::default());
        assert_eq!(
            found,
            [pair("Engineering", "Amato_Daniel.png"), pair("Science", "Curie_Marie.jpg")]
        );
    }

    #[test]
    fn filters_extensions_case_insensitively() {
        let fs = InMemoryFileSystem::new()
            .with_file("images/Math/A_B.JPG", "")
            .with_file("images/Math/C_D.jpeg", "")
            .with_file("images/Math/E_F.webp", "")
            .with_file("images/Math/notes.txt", "")
            .with_file("images/Math/Makefile", "");
        let found = collect(&fs, &ExtensionSet::default());
        assert_eq!(found, [pair("Math", "A_B.JPG"), pair("Math", "C_D.jpeg")]);

        let with_webp = ExtensionSet::parse(["jpg", "jpeg", "png", "webp"]).unwrap();
        assert_eq!(collect(&fs, &with_webp).len(), 3);
    }

    #[test]
    fn files_at_root_are_not_people() {
        let fs = InMemoryFileSystem::new()
            .with_file("images/Stray_Person.png", "")
            .with_file("images/History/Herodotus.png", "");
        let found = collect(&fs, &ExtensionSet::default());
        assert_eq!(found, [pair("History", "Herodotus.png")]);
    }

    #[test]
    fn nested_directories_are_not_descended() {
        let fs = InMemoryFileSystem::new()
            .with_file("images/English/archive/Old_Person.png", "")
            .with_dir("images/English/weird.png")
            .with_file("images/English/Austen_Jane.png", "");
        let found = collect(&fs, &ExtensionSet::default());
        assert_eq!(found, [pair("English", "Austen_Jane.png")]);
    }

    #[test]
    fn preserves_listing_order() {
        let fs = InMemoryFileSystem::new()
            .with_file("images/Zoology/b.png", "")
            .with_file("images/Zoology/a.png", "")
            .with_file("images/Art/c.png", "");
        let found = collect(&fs, &ExtensionSet::default());
        assert_eq!(
            found,
            [pair("Zoology", "b.png"), pair("Zoology", "a.png"), pair("Art", "c.png")]
        );
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let fs = InMemoryFileSystem::new().with_dir("images").with_dir("images/Empty");
        assert!(collect(&fs, &ExtensionSet::default()).is_empty());
    }

    #[test]
    fn missing_root_is_a_configuration_error() {
        let fs = InMemoryFileSystem::new();
        let exts = ExtensionSet::default();
        let err = TreeWalker::new(&fs, Path::new("images"), &exts).err().unwrap();
        assert!(matches!(err, RosterError::Configuration(_)));
    }

    #[test]
    fn root_that_is_a_file_is_a_configuration_error() {
        let fs = InMemoryFileSystem::new().with_file("images", "");
        let exts = ExtensionSet::default();
        let err = TreeWalker::new(&fs, Path::new("images"), &exts).err().unwrap();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn unreadable_department_stops_the_walk() {
        let fs = InMemoryFileSystem::new()
            .with_file("images/A/one.png", "")
            .with_file("images/B/two.png", "")
            .with_file("images/C/three.png", "")
            .with_denied("images/B");
        let exts = ExtensionSet::default();
        let mut walker = TreeWalker::new(&fs, Path::new("images"), &exts).unwrap();

        assert_eq!(walker.next().unwrap().unwrap().file_name, "one.png");
        let err = walker.next().unwrap().unwrap_err();
        match err {
            RosterError::Io { path, .. } => assert_eq!(path, Path::new("images/B")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(walker.next().is_none());
    }

    #[test]
    fn stem_drops_only_the_final_extension() {
        let entry =
            ImageEntry { category: "X".into(), file_name: "Van_Der_Berg_Anna.v2.PNG".into() };
        assert_eq!(entry.stem(), "Van_Der_Berg_Anna.v2");
    }
}
