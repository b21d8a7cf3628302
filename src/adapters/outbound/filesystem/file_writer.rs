use crate::ports::outbound::ReportStore;
use crate::shared::error::LicensingError;
use crate::shared::security::{validate_input_file, validate_output_target};
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// FileSystemStore adapter persisting reports on the local file system
///
/// Writes go to a temporary file in the target directory which is flushed,
/// synced and then renamed over the target. The temporary file is removed if
/// any step fails.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl ToString) -> LicensingError {
        LicensingError::FileWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
    }

    fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(contents)?;
        temp.flush()?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore for FileSystemStore {
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        validate_output_target(path).map_err(|e| Self::write_error(path, e))?;
        Self::write_atomically(path, contents).map_err(|e| Self::write_error(path, e))?;
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::symlink_metadata(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LicensingError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into())
            }
            Ok(_) => {}
        }

        let read_error = |details: String| LicensingError::FileReadError {
            path: path.to_path_buf(),
            details,
        };
        validate_input_file(path, "reference file").map_err(|e| read_error(e.to_string()))?;
        let contents = fs::read(path).map_err(|e| read_error(e.to_string()))?;
        Ok(Some(contents))
    }
}
