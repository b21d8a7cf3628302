/// Use cases module containing application business logic orchestration
mod check_licensing;
mod reconcile_reference;

pub use check_licensing::CheckLicensingUseCase;
pub use reconcile_reference::{LineEndingComparison, ReconcileOutcome, ReferenceReconciler};
