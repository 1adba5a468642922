//! Configuration file support for ib-health.
//!
//! Provides YAML-based configuration through `ib-health.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "ib-health.config.yml";

/// Default undated mapping snapshot read by `check`.
pub const DEFAULT_MAPPING_FILE: &str = "full_port_mapping.csv";

/// Default prefix for the dated snapshots written by `generate-mapping`.
pub const DEFAULT_OUTPUT_PREFIX: &str = "full_port_mapping";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub mapping_file: Option<String>,
    pub output_prefix: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref mapping_file) = config.mapping_file {
        if mapping_file.trim().is_empty() {
            bail!("Invalid config: mapping_file must not be empty.");
        }
    }
    if let Some(ref output_prefix) = config.output_prefix {
        if output_prefix.trim().is_empty() {
            bail!("Invalid config: output_prefix must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unrecognized configuration fields.
fn warn_unknown_fields(config: &ConfigFile) {
    for field in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' ignored.", field);
    }
}

/// Applies CLI flag > config file > built-in default for the mapping file.
pub fn resolve_mapping_file(cli_value: Option<String>, config: Option<&ConfigFile>) -> String {
    cli_value
        .or_else(|| config.and_then(|c| c.mapping_file.clone()))
        .unwrap_or_else(|| DEFAULT_MAPPING_FILE.to_string())
}

/// Applies CLI flag > config file > built-in default for the output prefix.
pub fn resolve_output_prefix(cli_value: Option<String>, config: Option<&ConfigFile>) -> String {
    cli_value
        .or_else(|| config.and_then(|c| c.output_prefix.clone()))
        .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string())
}
