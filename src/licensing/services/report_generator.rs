use crate::licensing::domain::{ArtifactWithLicenses, LicensingReport, LicensingRequirements};
use crate::ports::outbound::DislikePolicy;
use std::collections::BTreeSet;

/// Switches affecting how license names are filtered before normalization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationOptions {
    /// Keep only liked license names (when a liked registry exists)
    pub include_only_liked_in_report: bool,
    /// Canonicalize dependency license names before the liked filter, as is
    /// always done for supplemental artifacts
    pub coalesce_before_liked_filter: bool,
}

/// Report bucket an artifact was classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Licensed,
    Missing,
    Disliked,
}

/// Result of classifying one artifact
#[derive(Debug, Clone)]
pub struct Classification {
    artifact: ArtifactWithLicenses,
    raw_licenses: BTreeSet<String>,
    bucket: Bucket,
}

impl Classification {
    /// The artifact as it enters the report; licenses are normalized.
    pub fn artifact(&self) -> &ArtifactWithLicenses {
        &self.artifact
    }

    /// License names before filtering and normalization.
    pub fn raw_licenses(&self) -> &BTreeSet<String> {
        &self.raw_licenses
    }

    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// Adds the artifact to the matching bucket of `report`.
    pub fn apply_to(self, report: &mut LicensingReport) {
        match self.bucket {
            Bucket::Licensed => report.add_licensed_artifact(self.artifact),
            Bucket::Missing => report.add_missing_license(self.artifact),
            Bucket::Disliked => report.add_disliked_artifact(self.artifact),
        }
    }
}

/// ReportGenerator service classifying artifacts against merged requirements
///
/// Dependencies declared by the project and supplemental artifacts declared
/// in the requirements take separate paths. Dependency names are liked-filtered
/// as declared; supplemental names are canonicalized first. Both end in the
/// same normalize-then-judge step.
pub struct ReportGenerator<'a, P: DislikePolicy> {
    requirements: &'a LicensingRequirements,
    policy: &'a P,
    options: ClassificationOptions,
}

impl<'a, P: DislikePolicy> ReportGenerator<'a, P> {
    pub fn new(
        requirements: &'a LicensingRequirements,
        policy: &'a P,
        options: ClassificationOptions,
    ) -> Self {
        Self {
            requirements,
            policy,
            options,
        }
    }

    /// Classifies a dependency of the audited project
    ///
    /// A dependency declaring no licenses takes them from the requirements'
    /// missing-license supplement with exactly the same id, if there is one.
    pub fn classify_dependency(&self, dependency: &ArtifactWithLicenses) -> Classification {
        let mut raw = dependency.licenses().clone();
        if raw.is_empty() {
            if let Some(supplied) = self.requirements.license_names_for(dependency.artifact_id()) {
                raw = supplied.clone();
            }
        }

        if raw.is_empty() {
            return missing(dependency);
        }

        let candidates: Vec<String> = if self.options.coalesce_before_liked_filter {
            self.canonicalize(&raw)
        } else {
            raw.iter().cloned().collect()
        };
        self.classify_normalized(dependency, raw, candidates)
    }

    /// Classifies an artifact declared in the requirements' missing-artifacts
    /// section
    pub fn classify_supplemental(&self, record: &ArtifactWithLicenses) -> Classification {
        let raw = record.licenses().clone();
        if raw.is_empty() {
            return missing(record);
        }

        let candidates = self.canonicalize(&raw);
        self.classify_normalized(record, raw, candidates)
    }

    /// Classifies every dependency and then every supplemental artifact,
    /// handing each classification to `observer` before it enters the report
    pub fn generate_with<F>(
        &self,
        dependencies: &[ArtifactWithLicenses],
        mut observer: F,
    ) -> LicensingReport
    where
        F: FnMut(&Classification),
    {
        let mut report = LicensingReport::new();

        let classifications = dependencies
            .iter()
            .map(|dependency| self.classify_dependency(dependency))
            .chain(
                self.requirements
                    .missing_artifacts()
                    .map(|record| self.classify_supplemental(record)),
            );

        for classification in classifications {
            observer(&classification);
            classification.apply_to(&mut report);
        }

        report
    }

    pub fn generate(&self, dependencies: &[ArtifactWithLicenses]) -> LicensingReport {
        self.generate_with(dependencies, |_| {})
    }

    /// Number of artifacts `generate` will classify.
    pub fn artifact_count(&self, dependencies: &[ArtifactWithLicenses]) -> usize {
        dependencies.len() + self.requirements.missing_artifacts().count()
    }

    fn canonicalize(&self, licenses: &BTreeSet<String>) -> Vec<String> {
        licenses
            .iter()
            .map(|license| self.requirements.correct_license_name(license))
            .collect()
    }

    fn classify_normalized(
        &self,
        source: &ArtifactWithLicenses,
        raw_licenses: BTreeSet<String>,
        candidates: Vec<String>,
    ) -> Classification {
        let only_liked = self.options.include_only_liked_in_report
            && self.requirements.contains_liked_licenses();

        let mut artifact = source.without_licenses().with_licenses(
            candidates
                .into_iter()
                .filter(|license| !only_liked || self.requirements.is_liked_license(license)),
        );
        self.requirements.normalize(&mut artifact);

        let bucket = if self.policy.is_disliked(&artifact, self.requirements) {
            Bucket::Disliked
        } else {
            Bucket::Licensed
        };

        Classification {
            artifact,
            raw_licenses,
            bucket,
        }
    }
}

fn missing(source: &ArtifactWithLicenses) -> Classification {
    Classification {
        artifact: source.without_licenses(),
        raw_licenses: BTreeSet::new(),
        bucket: Bucket::Missing,
    }
}
