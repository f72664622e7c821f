//! Generator configuration.
//!
//! Every setting has a default matching the blog's layout, so the tool runs
//! with no configuration file at all. A `stork-gen.toml` in the working
//! directory (or the file named by `--config`) overrides individual keys.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "output"          # Rendered site directory to scan
//! destination = "stork.toml" # Where the Stork config is written
//!
//! [input]
//! base_directory = "output"  # Stork's base_directory, relative to where stork runs
//! url_prefix = "/"           # Prepended by Stork to every page url
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! [input]
//! url_prefix = "https://mmmorks.net/"
//! ```
//!
//! Unknown keys are rejected to catch typos early. The reserved page list and
//! the home page name are fixed (see [`crate::scan`]) and cannot be set here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "stork-gen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Generator configuration loaded from `stork-gen.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Directory of rendered HTML to scan.
    pub source: PathBuf,
    /// Path of the generated Stork config.
    pub destination: PathBuf,
    /// Values copied into the document's `[input]` section.
    pub input: InputConfig,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("output"),
            destination: PathBuf::from("stork.toml"),
            input: InputConfig::default(),
        }
    }
}

/// The global `[input]` section of the Stork config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Directory Stork resolves each file `path` against.
    pub base_directory: String,
    /// Prefix Stork prepends to each file `url`. Root-relative by default so
    /// the same index works on every host the site is served from.
    pub url_prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            base_directory: "output".to_string(),
            url_prefix: "/".to_string(),
        }
    }
}

impl IndexConfig {
    /// Validate that all paths and labels are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation("source must not be empty".into()));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "destination must not be empty".into(),
            ));
        }
        if self.input.base_directory.is_empty() {
            return Err(ConfigError::Validation(
                "input.base_directory must not be empty".into(),
            ));
        }
        // Page urls carry no leading slash, so the prefix must supply it.
        if !self.input.url_prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "input.url_prefix must end with '/'".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IndexConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(value)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the generator config.
///
/// - `Some(path)`: the file must exist.
/// - `None`: [`DEFAULT_CONFIG_FILE`] in `dir` is used if present, otherwise
///   the stock defaults.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<IndexConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let default_path = dir.join(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Some(load_raw_config(&default_path)?)
            } else {
                None
            }
        }
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `stork-gen.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# stork-gen Configuration
# =======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory the site generator rendered HTML into. Only its top level is
# scanned; 404, authors, categories, tags and archives pages are skipped.
source = "output"

# Where the Stork config is written. Overwritten on every run.
destination = "stork.toml"

# ---------------------------------------------------------------------------
# Stork [input] section
# ---------------------------------------------------------------------------
[input]
# Directory Stork reads pages from, relative to where `stork build` runs.
base_directory = "output"

# Prepended to every page url. Must end with "/".
# Root-relative by default so the index works on any host.
url_prefix = "/"
"#
}
