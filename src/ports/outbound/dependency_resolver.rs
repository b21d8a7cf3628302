use crate::licensing::domain::ArtifactWithLicenses;
use crate::shared::Result;
use std::path::Path;

/// DependencyResolver port for supplying the already-resolved dependency set
///
/// Resolving a dependency graph is out of scope; implementations only hand
/// over records carrying an id, a display name and the declared license names.
pub trait DependencyResolver {
    /// Reads the dependency records from the given manifest
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the dependency manifest
    ///
    /// # Returns
    /// Dependency records in manifest order, licenses as declared
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be read or parsed
    fn resolve_dependencies(&self, manifest_path: &Path) -> Result<Vec<ArtifactWithLicenses>>;
}
