use super::artifact::{ArtifactId, ArtifactWithLicenses};
use super::coalesced_license::CoalescedLicense;
use super::dual_license::DualLicense;
use super::license_name::names_match;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// The declarative rule set a dependency set is audited against
///
/// Every collection is keyed by its identity (artifact id or canonical license
/// name), so lookups and iteration are deterministic. Composition through
/// [`LicensingRequirements::combine_with`] is purely additive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RequirementsDocument", into = "RequirementsDocument")]
pub struct LicensingRequirements {
    missing_licenses: BTreeMap<ArtifactId, ArtifactWithLicenses>,
    override_licenses: BTreeMap<ArtifactId, ArtifactWithLicenses>,
    missing_artifacts: BTreeMap<ArtifactId, ArtifactWithLicenses>,
    coalesced_licenses: BTreeMap<String, CoalescedLicense>,
    dual_licenses: BTreeMap<String, DualLicense>,
    disliked_licenses: BTreeSet<String>,
    liked_licenses: BTreeSet<String>,
    dislike_exemptions: BTreeSet<ArtifactId>,
}

impl LicensingRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies license names for an artifact that declares none.
    pub fn add_artifact_missing_license(&mut self, artifact: ArtifactWithLicenses) {
        merge_artifact(&mut self.missing_licenses, artifact);
    }

    pub fn add_override_license(&mut self, artifact: ArtifactWithLicenses) {
        merge_artifact(&mut self.override_licenses, artifact);
    }

    pub fn add_missing_artifact(&mut self, artifact: ArtifactWithLicenses) {
        merge_artifact(&mut self.missing_artifacts, artifact);
    }

    pub fn add_coalesced_license(&mut self, coalesced: CoalescedLicense) {
        let key = coalesced.final_name().to_string();
        merge_keyed(&mut self.coalesced_licenses, key, coalesced, CoalescedLicense::combine_with);
    }

    pub fn add_dual_license(&mut self, dual: DualLicense) {
        let key = dual.final_name().to_string();
        merge_keyed(&mut self.dual_licenses, key, dual, DualLicense::combine_with);
    }

    pub fn add_disliked_license(&mut self, license: impl Into<String>) {
        self.disliked_licenses.insert(license.into());
    }

    pub fn add_liked_license(&mut self, license: impl Into<String>) {
        self.liked_licenses.insert(license.into());
    }

    pub fn add_dislike_exemption(&mut self, artifact_id: impl Into<ArtifactId>) {
        self.dislike_exemptions.insert(artifact_id.into());
    }

    pub fn is_disliked_license(&self, license: &str) -> bool {
        self.disliked_licenses.iter().any(|d| names_match(d, license))
    }

    pub fn is_liked_license(&self, license: &str) -> bool {
        self.liked_licenses.iter().any(|l| names_match(l, license))
    }

    pub fn contains_liked_licenses(&self) -> bool {
        !self.liked_licenses.is_empty()
    }

    pub fn contains_disliked_licenses(&self) -> bool {
        !self.disliked_licenses.is_empty()
    }

    pub fn is_exempt_from_dislike(&self, artifact_id: &ArtifactId) -> bool {
        self.dislike_exemptions.contains(artifact_id)
    }

    /// Canonical spelling of a license name according to the alias registry.
    ///
    /// Names are trimmed and compared case-insensitively. A canonical name
    /// wins over any alias, even one listed under another entry, so a name
    /// that is already canonical maps to itself. Unknown names come back
    /// unchanged.
    pub fn correct_license_name(&self, name: &str) -> String {
        let canonical = self
            .coalesced_licenses
            .values()
            .find(|coalesced| names_match(coalesced.final_name(), name));
        canonical
            .or_else(|| {
                self.coalesced_licenses
                    .values()
                    .find(|coalesced| coalesced.is_alias(name))
            })
            .map(|coalesced| coalesced.final_name().to_string())
            .unwrap_or_else(|| name.to_string())
    }

    /// The override record applying to `artifact_id`, if any.
    ///
    /// Override ids match as prefixes so the version can be left out. When
    /// several match, the longest (most specific) one wins.
    pub fn find_override(&self, artifact_id: &ArtifactId) -> Option<&ArtifactWithLicenses> {
        self.override_licenses
            .iter()
            .filter(|(prefix, _)| artifact_id.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.as_str().len())
            .map(|(_, replacement)| replacement)
    }

    /// Replaces the artifact's licenses with their canonical, expanded form
    /// and returns the licenses it had before.
    ///
    /// Steps: override by id prefix, alias canonicalization, then dual-license
    /// expansion. Expansion is transitive but expands each dual name at most
    /// once, so self-referencing registries terminate.
    pub fn normalize(&self, artifact: &mut ArtifactWithLicenses) -> BTreeSet<String> {
        let source = match self.find_override(artifact.artifact_id()) {
            Some(replacement) => replacement.licenses(),
            None => artifact.licenses(),
        };
        let normalized = self.expand_dual_licenses(source);
        artifact.replace_licenses(normalized)
    }

    fn expand_dual_licenses(&self, licenses: &BTreeSet<String>) -> BTreeSet<String> {
        let mut normalized = BTreeSet::new();
        let mut expanded = BTreeSet::new();
        let mut pending: Vec<String> = licenses
            .iter()
            .map(|license| self.correct_license_name(license))
            .collect();

        while let Some(name) = pending.pop() {
            match self.dual_licenses.get(&name) {
                Some(dual) if expanded.insert(name.clone()) => pending.extend(
                    dual.options()
                        .iter()
                        .map(|option| self.correct_license_name(option)),
                ),
                _ => {
                    normalized.insert(name);
                }
            }
        }

        normalized
    }

    /// License names the requirements supply for an artifact declaring none.
    pub fn license_names_for(&self, artifact_id: &ArtifactId) -> Option<&BTreeSet<String>> {
        self.missing_licenses
            .get(artifact_id)
            .map(ArtifactWithLicenses::licenses)
    }

    pub fn missing_licenses(&self) -> impl Iterator<Item = &ArtifactWithLicenses> {
        self.missing_licenses.values()
    }

    pub fn override_licenses(&self) -> impl Iterator<Item = &ArtifactWithLicenses> {
        self.override_licenses.values()
    }

    pub fn missing_artifacts(&self) -> impl Iterator<Item = &ArtifactWithLicenses> {
        self.missing_artifacts.values()
    }

    pub fn coalesced_licenses(&self) -> impl Iterator<Item = &CoalescedLicense> {
        self.coalesced_licenses.values()
    }

    pub fn dual_licenses(&self) -> impl Iterator<Item = &DualLicense> {
        self.dual_licenses.values()
    }

    pub fn disliked_licenses(&self) -> &BTreeSet<String> {
        &self.disliked_licenses
    }

    pub fn liked_licenses(&self) -> &BTreeSet<String> {
        &self.liked_licenses
    }

    pub fn dislike_exemptions(&self) -> &BTreeSet<ArtifactId> {
        &self.dislike_exemptions
    }

    /// Merges another requirements source into this one.
    ///
    /// Name sets are unioned. Keyed entries already present absorb the
    /// incoming aliases, options or licenses; new keys are inserted as-is.
    pub fn combine_with(&mut self, other: LicensingRequirements) {
        self.disliked_licenses.extend(other.disliked_licenses);
        self.liked_licenses.extend(other.liked_licenses);
        self.dislike_exemptions.extend(other.dislike_exemptions);

        for artifact in other.missing_licenses.into_values() {
            self.add_artifact_missing_license(artifact);
        }
        for artifact in other.override_licenses.into_values() {
            self.add_override_license(artifact);
        }
        for artifact in other.missing_artifacts.into_values() {
            self.add_missing_artifact(artifact);
        }
        for coalesced in other.coalesced_licenses.into_values() {
            self.add_coalesced_license(coalesced);
        }
        for dual in other.dual_licenses.into_values() {
            self.add_dual_license(dual);
        }
    }
}

fn merge_artifact(
    destination: &mut BTreeMap<ArtifactId, ArtifactWithLicenses>,
    artifact: ArtifactWithLicenses,
) {
    let key = artifact.artifact_id().clone();
    merge_keyed(destination, key, artifact, ArtifactWithLicenses::combine_with);
}

fn merge_keyed<K: Ord, V>(
    destination: &mut BTreeMap<K, V>,
    key: K,
    value: V,
    combine: impl FnOnce(&mut V, &V),
) {
    match destination.entry(key) {
        Entry::Occupied(mut existing) => combine(existing.get_mut(), &value),
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
    }
}

/// On-disk shape of a requirements document
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RequirementsDocument {
    missing_licenses: Vec<ArtifactWithLicenses>,
    override_licenses: Vec<ArtifactWithLicenses>,
    missing_artifacts: Vec<ArtifactWithLicenses>,
    coalesced_licenses: Vec<CoalescedLicense>,
    dual_licenses: Vec<DualLicense>,
    disliked_licenses: Vec<String>,
    liked_licenses: Vec<String>,
    dislike_exemptions: Vec<String>,
}

impl TryFrom<RequirementsDocument> for LicensingRequirements {
    type Error = String;

    fn try_from(document: RequirementsDocument) -> Result<Self, Self::Error> {
        let artifact_sections = [
            ("missing-licenses", &document.missing_licenses),
            ("override-licenses", &document.override_licenses),
            ("missing-artifacts", &document.missing_artifacts),
        ];
        for (section, artifacts) in artifact_sections {
            if let Some(index) = artifacts
                .iter()
                .position(|a| a.artifact_id().as_str().trim().is_empty())
            {
                return Err(format!("{}[{}].artifactId must not be empty", section, index));
            }
        }
        if let Some(index) = document
            .coalesced_licenses
            .iter()
            .position(|c| c.final_name().trim().is_empty())
        {
            return Err(format!("coalesced-licenses[{}].name must not be empty", index));
        }
        if let Some(index) = document
            .dual_licenses
            .iter()
            .position(|d| d.final_name().trim().is_empty())
        {
            return Err(format!("dual-licenses[{}].name must not be empty", index));
        }

        let mut requirements = LicensingRequirements::new();
        for artifact in document.missing_licenses {
            requirements.add_artifact_missing_license(artifact);
        }
        for artifact in document.override_licenses {
            requirements.add_override_license(artifact);
        }
        for artifact in document.missing_artifacts {
            requirements.add_missing_artifact(artifact);
        }
        for coalesced in document.coalesced_licenses {
            requirements.add_coalesced_license(coalesced);
        }
        for dual in document.dual_licenses {
            requirements.add_dual_license(dual);
        }
        for license in document.disliked_licenses {
            requirements.add_disliked_license(license);
        }
        for license in document.liked_licenses {
            requirements.add_liked_license(license);
        }
        for artifact_id in document.dislike_exemptions {
            requirements.add_dislike_exemption(artifact_id);
        }
        Ok(requirements)
    }
}

impl From<LicensingRequirements> for RequirementsDocument {
    fn from(requirements: LicensingRequirements) -> Self {
        Self {
            missing_licenses: requirements.missing_licenses.into_values().collect(),
            override_licenses: requirements.override_licenses.into_values().collect(),
            missing_artifacts: requirements.missing_artifacts.into_values().collect(),
            coalesced_licenses: requirements.coalesced_licenses.into_values().collect(),
            dual_licenses: requirements.dual_licenses.into_values().collect(),
            disliked_licenses: requirements.disliked_licenses.into_iter().collect(),
            liked_licenses: requirements.liked_licenses.into_iter().collect(),
            dislike_exemptions: requirements
                .dislike_exemptions
                .into_iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}
