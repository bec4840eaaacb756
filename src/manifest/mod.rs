//! People manifest: one record per discovered image.

pub mod generator;
pub mod writer;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// One person in the manifest.
///
/// Fields are declared in lexicographic order so the serialized key order is
/// stable and sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    /// Department directory the image was found in.
    pub department: String,
    /// Relative path `<root>/<department>/<file>`, always `/`-separated.
    pub image: String,
    /// Derived display name.
    pub name: String,
    /// Alternate spellings; currently always empty.
    pub variants: Vec<String>,
}

/// Builds the `image` path of a record from the configured root.
///
/// Backslashes become `/` and a trailing separator on the root is dropped,
/// so `images\` and `images/` both produce `images/<department>/<file>`.
///
/// # Errors
///
/// Returns [`RosterError::Configuration`] if the root is not valid UTF-8.
pub fn image_path(root: &Path, department: &str, file_name: &str) -> Result<String> {
    let Some(root) = root.to_str() else {
        return Err(RosterError::Configuration(format!(
            "image root {} is not valid UTF-8",
            root.display()
        )));
    };
    let root = root.replace('\\', "/");
    let root = root.trim_end_matches('/');
    Ok(format!("{root}/{department}/{file_name}"))
}
