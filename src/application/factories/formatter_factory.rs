use crate::adapters::outbound::formatters::{
    StructuredReportFormatter, TextReportFormatter, TextReportOptions,
};
use crate::application::dto::{AuditRequest, OutputFormat};
use crate::licensing::domain::LicensingReport;
use crate::ports::outbound::{ReportFormatter, ResourceLocator};
use crate::shared::Result;

/// Factory for creating report formatters
///
/// Keeps the choice of formatter adapter out of the use cases, which only
/// see the [`ReportFormatter`] port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for the request's primary report
    ///
    /// JSON requests get the structured formatter. Text requests get the
    /// notice layout with the request's prepend and append blocks.
    pub fn create<'a, L>(request: &AuditRequest, locator: L) -> Box<dyn ReportFormatter + 'a>
    where
        L: ResourceLocator + 'a,
    {
        match request.format {
            OutputFormat::Json => Box::new(StructuredReportFormatter::new()),
            OutputFormat::Text => Box::new(TextReportFormatter::new(
                locator,
                TextReportOptions::notice(request.prepend_text.clone(), request.append_text.clone()),
            )),
        }
    }

    /// Creates the full-text license list formatter
    pub fn create_license_list<'a, L>(
        request: &AuditRequest,
        locator: L,
    ) -> Box<dyn ReportFormatter + 'a>
    where
        L: ResourceLocator + 'a,
    {
        Box::new(TextReportFormatter::new(
            locator,
            TextReportOptions::license_list(request.list_prepend_text.clone()),
        ))
    }

    /// Reads back a report written in the structured format
    pub fn parse_structured(content: &str) -> Result<LicensingReport> {
        StructuredReportFormatter::parse(content)
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use license_audit::application::dto::OutputFormat;
    /// use license_audit::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Text);
    /// assert_eq!(message, "📝 Rendering text reports...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON report...",
            OutputFormat::Text => "📝 Rendering text reports...",
        }
    }
}
