use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A declared license name that stands for a choice between several licenses
///
/// An artifact under a dual license is satisfiable by any one of the options.
/// Records are identified by their final name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DualLicense {
    #[serde(rename = "name")]
    final_name: String,
    #[serde(default)]
    options: BTreeSet<String>,
}

impl DualLicense {
    pub fn new<I, S>(final_name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            final_name: final_name.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn final_name(&self) -> &str {
        &self.final_name
    }

    pub fn options(&self) -> &BTreeSet<String> {
        &self.options
    }

    /// Unions the other record's options into this one.
    pub fn combine_with(&mut self, other: &DualLicense) {
        self.options.extend(other.options.iter().cloned());
    }
}

impl PartialEq for DualLicense {
    fn eq(&self, other: &Self) -> bool {
        self.final_name == other.final_name
    }
}

impl Eq for DualLicense {}
