use crate::licensing::domain::{ArtifactWithLicenses, LicensingRequirements};
use crate::ports::outbound::{DependencyResolver, RequirementsLoader};
use crate::shared::error::LicensingError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Serialization format of a document, chosen from its file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DependencyManifest {
    #[serde(default)]
    dependencies: Vec<ArtifactWithLicenses>,
}

/// FileSystemReader adapter for reading dependency manifests and requirements
/// documents
///
/// JSON, TOML and YAML are accepted; the format follows the file extension
/// and defaults to YAML.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_document(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_input_file(path, file_description).map_err(|e| LicensingError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        fs::read_to_string(path).map_err(|e| {
            LicensingError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyResolver for FileSystemReader {
    fn resolve_dependencies(&self, manifest_path: &Path) -> Result<Vec<ArtifactWithLicenses>> {
        let content = self.read_document(manifest_path, "dependency manifest")?;

        let manifest: DependencyManifest = DocumentFormat::from_path(manifest_path)
            .parse(&content)
            .map_err(|details| LicensingError::DependencyManifestError {
                path: manifest_path.to_path_buf(),
                details,
            })?;

        Ok(manifest.dependencies)
    }
}

impl RequirementsLoader for FileSystemReader {
    fn load_requirements(&self, path: &Path) -> Result<LicensingRequirements> {
        let content = self.read_document(path, "requirements document")?;

        DocumentFormat::from_path(path)
            .parse(&content)
            .map_err(|details| {
                LicensingError::RequirementsParseError {
                    path: path.to_path_buf(),
                    details,
                }
                .into()
            })
    }
}
