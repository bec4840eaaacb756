//! Manifest persistence.

use std::path::Path;

use crate::error::{Result, RosterError};
use crate::manifest::ImageRecord;
use crate::ports::filesystem::FileSystem;

/// Renders records as an indented JSON array with a trailing newline.
///
/// # Errors
///
/// Returns [`RosterError::Serialize`] if encoding fails.
pub fn render_manifest(records: &[ImageRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Writes the manifest to `path`, replacing any previous file, and returns
/// the number of records written.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`RosterError::Io`] if the parent directory cannot be created or
/// the file cannot be written; the previous manifest is then left as it was.
pub fn write_manifest(fs: &dyn FileSystem, path: &Path, records: &[ImageRecord]) -> Result<usize> {
    let json = render_manifest(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
    }
    fs.write(path, &json).map_err(|e| RosterError::io(path, e))?;

    tracing::info!(path = %path.display(), count = records.len(), "wrote manifest");
    Ok(records.len())
}
