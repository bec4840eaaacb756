//! Run configuration: image root, manifest path, recognized extensions.
//!
//! Values are layered, lowest precedence first: built-in defaults, a YAML
//! config file, `ROSTER_*` environment variables, then command-line flags.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, RosterError};
use crate::ports::filesystem::FileSystem;

/// Default image root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "images";
/// Default manifest location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "data/people.json";
/// Extensions recognized when nothing else is configured.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "roster.yaml";

/// Environment variable overriding the image root.
pub const ENV_ROOT: &str = "ROSTER_ROOT";
/// Environment variable overriding the manifest path.
pub const ENV_OUTPUT: &str = "ROSTER_OUTPUT";
/// Environment variable overriding the extension set (comma-separated).
pub const ENV_EXTENSIONS: &str = "ROSTER_EXTENSIONS";

/// Set of recognized image extensions, stored lowercase without a leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Builds a set from user-supplied extensions such as `.PNG`, `jpg` or ` webp `.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Configuration`] if no usable extension remains.
    pub fn parse<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = items
            .into_iter()
            .map(|s| s.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if set.is_empty() {
            return Err(RosterError::Configuration(
                "at least one image extension must be configured".into(),
            ));
        }
        Ok(Self(set))
    }

    /// Returns `true` if the file name's final extension is in the set,
    /// compared case-insensitively.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.0.contains(&ext.to_ascii_lowercase()))
    }

    /// Iterates the extensions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self(DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose immediate subdirectories are departments.
    pub root: PathBuf,
    /// Where the manifest is written.
    pub output: PathBuf,
    /// Extensions that mark a file as an image.
    pub extensions: ExtensionSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: ExtensionSet::default(),
        }
    }
}

/// On-disk shape of `roster.yaml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    extensions: Option<Vec<String>>,
}

/// Values supplied on the command line. `None`/empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file; must exist when set.
    pub config_file: Option<PathBuf>,
    /// Image root.
    pub root: Option<PathBuf>,
    /// Manifest path.
    pub output: Option<PathBuf>,
    /// Extension set; replaces every lower layer when non-empty.
    pub extensions: Vec<String>,
}

impl Config {
    /// Resolves the configuration from every layer.
    ///
    /// `env` looks up environment variables; callers pass `std::env::var`
    /// (wrapped) in production and a fixed map in tests.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Configuration`] if an explicit config file is
    /// missing, a config file cannot be read or parsed, or the resulting
    /// extension set is empty.
    pub fn resolve<F>(fs: &dyn FileSystem, overrides: &Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(file) = load_config_file(fs, overrides.config_file.as_deref())? {
            if let Some(root) = file.root {
                config.root = root;
            }
            if let Some(output) = file.output {
                config.output = output;
            }
            if let Some(exts) = file.extensions {
                config.extensions = ExtensionSet::parse(exts)?;
            }
        }

        if let Some(root) = env(ENV_ROOT).filter(|v| !v.trim().is_empty()) {
            config.root = PathBuf::from(root);
        }
        if let Some(output) = env(ENV_OUTPUT).filter(|v| !v.trim().is_empty()) {
            config.output = PathBuf::from(output);
        }
        if let Some(exts) = env(ENV_EXTENSIONS).filter(|v| !v.trim().is_empty()) {
            config.extensions = ExtensionSet::parse(exts.split(','))?;
        }

        if let Some(root) = &overrides.root {
            config.root.clone_from(root);
        }
        if let Some(output) = &overrides.output {
            config.output.clone_from(output);
        }
        if !overrides.extensions.is_empty() {
            config.extensions = ExtensionSet::parse(&overrides.extensions)?;
        }

        tracing::debug!(
            root = %config.root.display(),
            output = %config.output.display(),
            extensions = ?config.extensions.iter().collect::<Vec<_>>(),
            "resolved configuration"
        );
        Ok(config)
    }
}

/// Reads the explicit config file, or `roster.yaml` if it happens to exist.
fn load_config_file(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    let path = match explicit {
        Some(path) => {
            if !fs.exists(path) {
                return Err(RosterError::Configuration(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            path
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !fs.exists(default) {
                return Ok(None);
            }
            default
        }
    };

    let contents = fs.read_to_string(path).map_err(|e| {
        RosterError::Configuration(format!("failed to read config file {}: {e}", path.display()))
    })?;
    if contents.trim().is_empty() {
        return Ok(Some(ConfigFile::default()));
    }
    let file = serde_yaml::from_str(&contents).map_err(|e| {
        RosterError::Configuration(format!("failed to parse config file {}: {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(Some(file))
}
