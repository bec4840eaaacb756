//! Manifest generation: walks the department tree via `ServiceContext` ports.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::manifest::{image_path, ImageRecord};
use crate::names::derive_name;
use crate::walker::TreeWalker;

/// Builds the manifest records for the tree at `config.root`.
///
/// Records come out in traversal order. Nothing is written; see
/// [`crate::manifest::writer`] for persistence.
///
/// # Errors
///
/// Returns the first configuration or traversal error; no partial list is
/// returned.
pub fn generate(ctx: &ServiceContext, config: &Config) -> Result<Vec<ImageRecord>> {
    let walker = TreeWalker::new(ctx.fs.as_ref(), &config.root, &config.extensions)?;

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry?;
        let derived = derive_name(entry.stem());
        if derived.name.is_empty() {
            tracing::warn!(
                department = %entry.category,
                file = %entry.file_name,
                "file name yields an empty display name"
            );
        }
        let record = ImageRecord {
            image: image_path(&config.root, &entry.category, &entry.file_name)?,
            name: derived.name,
            variants: derived.variants,
            department: entry.category,
        };
        tracing::debug!(name = %record.name, image = %record.image, "discovered person");
        records.push(record);
    }

    tracing::info!(count = records.len(), root = %config.root.display(), "scanned image tree");
    Ok(records)
}
