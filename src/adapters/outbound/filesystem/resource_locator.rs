use crate::ports::outbound::ResourceLocator;
use crate::shared::error::LicensingError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// DirectoryResourceLocator adapter resolving resources to files on disk
///
/// A name is first tried as a path of its own. After that each search
/// directory is tried in order, first with `<name>` and then `<name>.txt`.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResourceLocator {
    search_dirs: Vec<PathBuf>,
}

impl DirectoryResourceLocator {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Finds the file holding the named resource
    ///
    /// # Errors
    /// Returns `LicensingError::ResourceNotFound` listing the searched
    /// directories when no candidate is a regular file
    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        let direct = PathBuf::from(name);
        let candidates = std::iter::once(direct).chain(self.search_dirs.iter().flat_map(|dir| {
            [dir.join(name), dir.join(format!("{}.txt", name))]
        }));

        for candidate in candidates {
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        let searched = if self.search_dirs.is_empty() {
            "(no resource directories configured)".to_string()
        } else {
            self.search_dirs
                .iter()
                .map(|dir| dir.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Err(LicensingError::ResourceNotFound {
            name: name.to_string(),
            searched,
        }
        .into())
    }

    fn read_file(path: &Path) -> Result<String> {
        let read_error = |details: String| LicensingError::FileReadError {
            path: path.to_path_buf(),
            details,
        };
        validate_input_file(path, "resource").map_err(|e| read_error(e.to_string()))?;
        let text = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
        Ok(text)
    }
}

impl ResourceLocator for DirectoryResourceLocator {
    fn read_resource(&self, name: &str) -> Result<String> {
        let path = self.locate(name)?;
        Self::read_file(&path)
    }
}
