mod dislike_policy;
mod failure_policy;

pub use dislike_policy::DefaultDislikePolicy;
pub use failure_policy::{AuditVerdict, FailurePolicy};
