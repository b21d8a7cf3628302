use crate::licensing::domain::LicensingReport;

/// Outcome of evaluating a report against the failure flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditVerdict {
    Passed,
    Failed { message: String },
}

impl AuditVerdict {
    pub fn is_failed(&self) -> bool {
        matches!(self, AuditVerdict::Failed { .. })
    }
}

/// FailurePolicy decides whether a finished report fails the audit
///
/// A disabled flag only suppresses the failure; the artifacts still appear in
/// the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailurePolicy {
    pub fail_on_missing: bool,
    pub fail_on_disliked: bool,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            fail_on_missing: true,
            fail_on_disliked: true,
        }
    }
}

impl FailurePolicy {
    pub fn new(fail_on_missing: bool, fail_on_disliked: bool) -> Self {
        Self {
            fail_on_missing,
            fail_on_disliked,
        }
    }

    /// Evaluates the report's bucket sizes
    ///
    /// # Returns
    /// `AuditVerdict::Failed` with a message naming the triggered counts, or
    /// `AuditVerdict::Passed`
    pub fn evaluate(&self, report: &LicensingReport) -> AuditVerdict {
        let disliked = report.disliked_count();
        let missing = report.missing_count();
        let fail_disliked = self.fail_on_disliked && disliked > 0;
        let fail_missing = self.fail_on_missing && missing > 0;

        let message = match (fail_disliked, fail_missing) {
            (true, true) => format!(
                "This project has {} and {} missing licensing information.",
                disliked_artifacts(disliked),
                artifacts(missing)
            ),
            (false, true) => format!(
                "This project has {} missing licensing information.",
                artifacts(missing)
            ),
            (true, false) => format!("This project has {}.", disliked_artifacts(disliked)),
            (false, false) => return AuditVerdict::Passed,
        };

        AuditVerdict::Failed { message }
    }
}

fn artifacts(count: usize) -> String {
    format!("{} artifact{}", count, plural(count))
}

fn disliked_artifacts(count: usize) -> String {
    format!("{} disliked artifact{}", count, plural(count))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
