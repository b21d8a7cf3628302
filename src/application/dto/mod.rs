/// Data Transfer Objects for application layer
///
/// DTOs carry the options of one audit run into the use case and its results
/// back out, keeping the CLI apart from the licensing core.
mod audit_request;
mod audit_response;
mod output_format;

pub use audit_request::{AuditRequest, AuditRequestBuilder};
pub use audit_response::AuditResponse;
pub use output_format::OutputFormat;
