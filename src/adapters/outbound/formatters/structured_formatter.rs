use crate::licensing::domain::{ArtifactWithLicenses, LicensingReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct ReportDocument {
    licensing: LicensingSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct LicensingSection {
    #[serde(default)]
    disliked_licenses: usize,
    #[serde(default)]
    missing_licenses: usize,
    #[serde(default)]
    licensing_check: bool,
    #[serde(default)]
    artifacts: Vec<ArtifactWithLicenses>,
    #[serde(default)]
    license_missing: Vec<ArtifactWithLicenses>,
    #[serde(default)]
    disliked_artifacts: Vec<ArtifactWithLicenses>,
}

/// StructuredReportFormatter adapter rendering the machine-readable report
///
/// Artifacts appear in id order with sorted license lists, so equal reports
/// render to identical bytes. Counts and the check flag are informational;
/// [`StructuredReportFormatter::parse`] rebuilds them from the buckets.
pub struct StructuredReportFormatter;

impl StructuredReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Reads a report previously rendered by this formatter
    pub fn parse(content: &str) -> Result<LicensingReport> {
        let document: ReportDocument = serde_json::from_str(content)?;
        let section = document.licensing;

        let mut report = LicensingReport::new();
        for artifact in section.artifacts {
            report.add_licensed_artifact(artifact);
        }
        for artifact in section.license_missing {
            report.add_missing_license(artifact);
        }
        for artifact in section.disliked_artifacts {
            report.add_disliked_artifact(artifact);
        }
        Ok(report)
    }
}

impl Default for StructuredReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for StructuredReportFormatter {
    fn format(&self, report: &LicensingReport) -> Result<String> {
        let document = ReportDocument {
            licensing: LicensingSection {
                disliked_licenses: report.disliked_count(),
                missing_licenses: report.missing_count(),
                licensing_check: report.is_passing(),
                artifacts: report.licensed_artifacts().cloned().collect(),
                license_missing: report.missing_artifacts().cloned().collect(),
                disliked_artifacts: report.disliked_artifacts().cloned().collect(),
            },
        };

        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}
