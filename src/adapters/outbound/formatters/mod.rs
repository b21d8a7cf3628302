/// Formatter adapters for the structured and text report layouts
mod structured_formatter;
mod text_formatter;

pub use structured_formatter::StructuredReportFormatter;
pub use text_formatter::{LineTerminator, TextReportFormatter, TextReportOptions, RULE};
