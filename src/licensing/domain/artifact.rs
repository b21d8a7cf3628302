use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identity of an artifact, e.g. `org.example:widget:jar:1.2.0`
///
/// Records are keyed by this type alone; two records carrying the same id are
/// the same logical artifact whatever their license sets say.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this id begins with `prefix`, so a versionless id matches
    /// every version of the artifact.
    pub fn starts_with(&self, prefix: &ArtifactId) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArtifactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ArtifactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An artifact together with the license names it is offered under
///
/// Used for requirement input (overrides, supplements, supplemental
/// artifacts) and for report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactWithLicenses {
    #[serde(rename = "artifactId")]
    artifact_id: ArtifactId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    licenses: BTreeSet<String>,
}

impl ArtifactWithLicenses {
    pub fn new(artifact_id: impl Into<ArtifactId>, name: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            name: name.into(),
            licenses: BTreeSet::new(),
        }
    }

    pub fn with_licenses<I, S>(mut self, licenses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.licenses.extend(licenses.into_iter().map(Into::into));
        self
    }

    pub fn artifact_id(&self) -> &ArtifactId {
        &self.artifact_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name shown in text reports; falls back to the id for unnamed artifacts.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.artifact_id.as_str()
        } else {
            &self.name
        }
    }

    pub fn licenses(&self) -> &BTreeSet<String> {
        &self.licenses
    }

    pub fn add_license(&mut self, license: impl Into<String>) {
        self.licenses.insert(license.into());
    }

    /// Replaces the license set, returning the previous one.
    pub fn replace_licenses(&mut self, licenses: BTreeSet<String>) -> BTreeSet<String> {
        std::mem::replace(&mut self.licenses, licenses)
    }

    /// Unions the other record's licenses into this one.
    ///
    /// The name is only taken over when this record has none.
    pub fn combine_with(&mut self, other: &ArtifactWithLicenses) {
        if self.name.is_empty() && !other.name.is_empty() {
            self.name = other.name.clone();
        }
        self.licenses.extend(other.licenses.iter().cloned());
    }

    /// A copy carrying identity and name only.
    pub fn without_licenses(&self) -> Self {
        Self::new(self.artifact_id.clone(), self.name.clone())
    }
}

impl PartialEq for ArtifactWithLicenses {
    fn eq(&self, other: &Self) -> bool {
        self.artifact_id == other.artifact_id
    }
}

impl Eq for ArtifactWithLicenses {}

impl std::hash::Hash for ArtifactWithLicenses {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.artifact_id.hash(state);
    }
}
