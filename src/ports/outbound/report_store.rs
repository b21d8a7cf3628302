use crate::shared::Result;
use std::path::Path;

/// ReportStore port for persisting generated reports and reading reference files
pub trait ReportStore {
    /// Writes `contents` to `path`, replacing any existing file
    ///
    /// Parent directories are created as needed. Readers never observe a
    /// partially written file.
    ///
    /// # Errors
    /// Returns an error naming the path if any step of the write fails
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Reads a file if it exists
    ///
    /// # Returns
    /// `None` when there is no file at `path`
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>>;
}
