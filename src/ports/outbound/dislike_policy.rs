use crate::licensing::domain::{ArtifactWithLicenses, LicensingRequirements};

/// DislikePolicy port deciding whether a normalized artifact is disliked
pub trait DislikePolicy {
    /// # Arguments
    /// * `artifact` - The artifact with its normalized license set
    /// * `requirements` - The merged requirements of the current run
    fn is_disliked(
        &self,
        artifact: &ArtifactWithLicenses,
        requirements: &LicensingRequirements,
    ) -> bool;
}

impl<F> DislikePolicy for F
where
    F: Fn(&ArtifactWithLicenses, &LicensingRequirements) -> bool,
{
    fn is_disliked(
        &self,
        artifact: &ArtifactWithLicenses,
        requirements: &LicensingRequirements,
    ) -> bool {
        self(artifact, requirements)
    }
}
