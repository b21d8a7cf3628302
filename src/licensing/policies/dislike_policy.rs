use crate::licensing::domain::{ArtifactWithLicenses, LicensingRequirements};
use crate::ports::outbound::DislikePolicy;

/// Default rule for deciding whether an artifact is disliked
///
/// Rules, in order:
/// 1. An exempt artifact id (exact match) is never disliked.
/// 2. If liked licenses are declared, the artifact is disliked unless at least
///    one of its licenses is liked.
/// 3. Otherwise, if disliked licenses are declared, the artifact is disliked
///    when it has licenses and every one of them is disliked.
/// 4. Otherwise nothing is disliked.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDislikePolicy;

impl DefaultDislikePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl DislikePolicy for DefaultDislikePolicy {
    fn is_disliked(
        &self,
        artifact: &ArtifactWithLicenses,
        requirements: &LicensingRequirements,
    ) -> bool {
        if requirements.is_exempt_from_dislike(artifact.artifact_id()) {
            return false;
        }

        let licenses = artifact.licenses();
        if requirements.contains_liked_licenses() {
            return !licenses.iter().any(|l| requirements.is_liked_license(l));
        }

        if requirements.contains_disliked_licenses() {
            return !licenses.is_empty()
                && licenses.iter().all(|l| requirements.is_disliked_license(l));
        }

        false
    }
}
