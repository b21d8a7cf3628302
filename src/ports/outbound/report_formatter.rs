use crate::licensing::domain::LicensingReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a licensing report
///
/// Implemented by the structured (JSON) and text renderers.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails or a referenced resource
    /// cannot be read
    fn format(&self, report: &LicensingReport) -> Result<String>;
}
