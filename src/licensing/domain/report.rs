use super::artifact::{ArtifactId, ArtifactWithLicenses};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

type Bucket = BTreeMap<ArtifactId, ArtifactWithLicenses>;

/// Classification of a dependency set into licensed, missing and disliked
/// artifacts
///
/// Counts and the pass flag are derived from bucket sizes on every call, so
/// they stay current across additions and merges.
#[derive(Debug, Clone, Default)]
pub struct LicensingReport {
    licensed: Bucket,
    missing: Bucket,
    disliked: Bucket,
}

impl LicensingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_licensed_artifact(&mut self, artifact: ArtifactWithLicenses) {
        insert_or_union(&mut self.licensed, artifact);
    }

    /// Records an artifact without licensing information. Only identity and
    /// name are kept.
    pub fn add_missing_license(&mut self, artifact: ArtifactWithLicenses) {
        insert_or_union(&mut self.missing, artifact.without_licenses());
    }

    pub fn add_disliked_artifact(&mut self, artifact: ArtifactWithLicenses) {
        insert_or_union(&mut self.disliked, artifact);
    }

    /// Licensed artifacts in id order.
    pub fn licensed_artifacts(&self) -> impl Iterator<Item = &ArtifactWithLicenses> {
        self.licensed.values()
    }

    pub fn missing_artifacts(&self) -> impl Iterator<Item = &ArtifactWithLicenses> {
        self.missing.values()
    }

    pub fn disliked_artifacts(&self) -> impl Iterator<Item = &ArtifactWithLicenses> {
        self.disliked.values()
    }

    pub fn licensed_count(&self) -> usize {
        self.licensed.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn disliked_count(&self) -> usize {
        self.disliked.len()
    }

    pub fn is_passing(&self) -> bool {
        self.missing.is_empty() && self.disliked.is_empty()
    }

    /// Folds another report into this one; duplicate ids union their licenses.
    pub fn combine_with(&mut self, other: LicensingReport) {
        for artifact in other.licensed.into_values() {
            self.add_licensed_artifact(artifact);
        }
        for artifact in other.missing.into_values() {
            self.add_missing_license(artifact);
        }
        for artifact in other.disliked.into_values() {
            self.add_disliked_artifact(artifact);
        }
    }
}

impl PartialEq for LicensingReport {
    fn eq(&self, other: &Self) -> bool {
        same_bucket(&self.licensed, &other.licensed)
            && same_bucket(&self.missing, &other.missing)
            && same_bucket(&self.disliked, &other.disliked)
    }
}

impl Eq for LicensingReport {}

fn insert_or_union(bucket: &mut Bucket, artifact: ArtifactWithLicenses) {
    match bucket.entry(artifact.artifact_id().clone()) {
        Entry::Occupied(mut existing) => existing.get_mut().combine_with(&artifact),
        Entry::Vacant(slot) => {
            slot.insert(artifact);
        }
    }
}

// Artifact equality is id-only; report equality also looks at names and licenses.
fn same_bucket(a: &Bucket, b: &Bucket) -> bool {
    a.len() == b.len()
        && a.values().zip(b.values()).all(|(x, y)| {
            x.artifact_id() == y.artifact_id() && x.name() == y.name() && x.licenses() == y.licenses()
        })
}
