use crate::application::use_cases::ReconcileOutcome;
use crate::licensing::domain::LicensingReport;
use crate::licensing::policies::AuditVerdict;
use std::path::PathBuf;

/// AuditResponse - Response DTO from the licensing check use case
#[derive(Debug, Clone)]
pub struct AuditResponse {
    /// The classified (and merged) report
    pub report: LicensingReport,
    /// Report files written during the run, in write order
    pub written_files: Vec<PathBuf>,
    /// Reference files that were reconciled, with the outcome for each
    pub reconciled: Vec<(PathBuf, ReconcileOutcome)>,
    pub verdict: AuditVerdict,
}

impl AuditResponse {
    pub fn new(
        report: LicensingReport,
        written_files: Vec<PathBuf>,
        reconciled: Vec<(PathBuf, ReconcileOutcome)>,
        verdict: AuditVerdict,
    ) -> Self {
        Self {
            report,
            written_files,
            reconciled,
            verdict,
        }
    }
}
