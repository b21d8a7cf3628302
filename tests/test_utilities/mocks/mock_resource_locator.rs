use license_audit::prelude::*;
use std::collections::HashMap;

/// Mock ResourceLocator serving license texts and text blocks from memory
#[derive(Default)]
pub struct MockResourceLocator {
    pub resources: HashMap<String, String>,
}

impl MockResourceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: &str, text: &str) -> Self {
        self.resources.insert(name.to_string(), text.to_string());
        self
    }
}

impl ResourceLocator for MockResourceLocator {
    fn read_resource(&self, name: &str) -> Result<String> {
        match self.resources.get(name) {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("Mock resource not found: {}", name),
        }
    }
}
