//! Configuration file support for dep-tree-diff.
//!
//! Provides YAML-based configuration through `dep-tree-diff.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{DiffStrategy, OutputFormat};
use crate::dependency_diff::policies::InputThresholds;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-tree-diff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct DiffConfigFile {
    pub mode: Option<String>,
    pub format: Option<String>,
    pub strict: Option<bool>,
    pub indent_unit: Option<usize>,
    pub fail_on_changes: Option<bool>,
    pub thresholds: Option<InputThresholds>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl DiffConfigFile {
    /// Parsed `mode`, if set. Validation has already rejected bad values.
    pub fn strategy(&self) -> Result<Option<DiffStrategy>> {
        self.mode
            .as_deref()
            .map(|mode| mode.parse::<DiffStrategy>().map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Parsed `format`, if set.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| format.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<DiffConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: DiffConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    log::debug!("Loaded config from {}", path.display());

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<DiffConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &DiffConfigFile) -> Result<()> {
    if let Err(e) = config.strategy() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: `mode` accepts full, only-changes, flattened or legacy.",
            e
        );
    }
    if let Err(e) = config.output_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: `format` accepts text, markdown or json.",
            e
        );
    }
    if config.indent_unit == Some(0) {
        bail!(
            "Invalid config: indent_unit must be at least 1.\n\n\
             💡 Hint: `gradle dependencies` output uses 5 columns per level."
        );
    }
    if let Some(thresholds) = &config.thresholds {
        thresholds
            .validate()
            .context("Invalid config: thresholds")?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &DiffConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
