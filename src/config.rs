//! Configuration file support for license-audit.
//!
//! Provides YAML-based configuration through `license-audit.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use license_audit::application::dto::OutputFormat;
use license_audit::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "license-audit.config.yml";

/// Top-level configuration file schema.
///
/// Every field mirrors a command-line option; values given on the command
/// line take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub dependencies: Option<PathBuf>,
    pub requirements: Option<Vec<PathBuf>>,
    pub output_dir: Option<PathBuf>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub list_report: Option<String>,
    pub prepend_text: Option<String>,
    pub append_text: Option<String>,
    pub list_prepend_text: Option<String>,
    pub check_existing_notice_file: Option<PathBuf>,
    pub check_existing_licenses_file: Option<PathBuf>,
    pub overwrite: Option<bool>,
    pub normalize_line_endings: Option<bool>,
    pub fail_on_missing: Option<bool>,
    pub fail_on_disliked: Option<bool>,
    pub include_only_liked: Option<bool>,
    pub coalesce_before_liked_filter: Option<bool>,
    pub resource_dirs: Option<Vec<PathBuf>>,
    pub merge_reports: Option<Vec<PathBuf>>,
    pub skip: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`; validated at load time.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| format.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
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
    if let Some(ref requirements) = config.requirements {
        for (i, path) in requirements.iter().enumerate() {
            if path.as_os_str().is_empty() {
                bail!(
                    "Invalid config: requirements[{}] must not be empty.\n\n\
                     💡 Hint: Each requirements entry must name a requirements document (e.g., \"licensing-requirements.yml\").",
                    i
                );
            }
        }
    }

    let format = config.output_format().context("Invalid config: format")?;

    if format == Some(OutputFormat::Json) {
        let text_only = [
            ("list_report", config.list_report.is_some()),
            (
                "check_existing_notice_file",
                config.check_existing_notice_file.is_some(),
            ),
            (
                "check_existing_licenses_file",
                config.check_existing_licenses_file.is_some(),
            ),
        ];
        if let Some((field, _)) = text_only.iter().find(|(_, set)| *set) {
            bail!(
                "Invalid config: {} requires format: text.\n\n\
                 💡 Hint: Remove the field or set 'format: text'.",
                field
            );
        }
    }

    if config.check_existing_licenses_file.is_some() && config.list_report.is_none() {
        bail!(
            "Invalid config: check_existing_licenses_file requires list_report.\n\n\
             💡 Hint: Name the generated license list with 'list_report'."
        );
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
