use license_audit::prelude::*;
use std::path::Path;

/// Mock DependencyResolver for testing
pub struct MockDependencyResolver {
    pub dependencies: Vec<ArtifactWithLicenses>,
    pub should_fail: bool,
}

impl MockDependencyResolver {
    pub fn new(dependencies: Vec<ArtifactWithLicenses>) -> Self {
        Self {
            dependencies,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            dependencies: Vec::new(),
            should_fail: true,
        }
    }
}

impl DependencyResolver for MockDependencyResolver {
    fn resolve_dependencies(&self, _manifest_path: &Path) -> Result<Vec<ArtifactWithLicenses>> {
        if self.should_fail {
            anyhow::bail!("Mock dependency manifest read failure");
        }
        Ok(self.dependencies.clone())
    }
}
