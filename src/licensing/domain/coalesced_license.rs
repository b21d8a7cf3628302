use super::license_name::names_match;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A canonical license name plus the alternate spellings that mean the same license
///
/// Records are identified by their final name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoalescedLicense {
    #[serde(rename = "name")]
    final_name: String,
    #[serde(default)]
    aliases: BTreeSet<String>,
}

impl CoalescedLicense {
    pub fn new<I, S>(final_name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            final_name: final_name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn final_name(&self) -> &str {
        &self.final_name
    }

    pub fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }

    /// True if `name` is this license's canonical name or one of its aliases.
    pub fn matches(&self, name: &str) -> bool {
        names_match(&self.final_name, name) || self.is_alias(name)
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.iter().any(|alias| names_match(alias, name))
    }

    /// Unions the other record's aliases into this one. Final names are not
    /// cascaded.
    pub fn combine_with(&mut self, other: &CoalescedLicense) {
        self.aliases.extend(other.aliases.iter().cloned());
    }
}

impl PartialEq for CoalescedLicense {
    fn eq(&self, other: &Self) -> bool {
        self.final_name == other.final_name
    }
}

impl Eq for CoalescedLicense {}
