use license_audit::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock RequirementsLoader serving documents from memory
#[derive(Default)]
pub struct MockRequirementsLoader {
    pub documents: HashMap<PathBuf, LicensingRequirements>,
}

impl MockRequirementsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, requirements: LicensingRequirements) -> Self {
        self.documents.insert(PathBuf::from(path), requirements);
        self
    }
}

impl RequirementsLoader for MockRequirementsLoader {
    fn load_requirements(&self, path: &Path) -> Result<LicensingRequirements> {
        match self.documents.get(path) {
            Some(requirements) => Ok(requirements.clone()),
            None => anyhow::bail!("Mock requirements document not found: {}", path.display()),
        }
    }
}
