use crate::licensing::domain::LicensingRequirements;
use crate::shared::Result;
use std::path::Path;

/// RequirementsLoader port for loading one requirements document
pub trait RequirementsLoader {
    /// Loads and parses a requirements document
    ///
    /// Duplicate keys inside the document are merged the same way separate
    /// documents are combined.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or malformed
    fn load_requirements(&self, path: &Path) -> Result<LicensingRequirements>;
}
