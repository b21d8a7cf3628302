use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a failed audit apart from a broken run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the audit passed (or was skipped)
    Success = 0,
    /// The audit failed: missing or disliked licenses with the matching fail flag enabled
    AuditFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable requirements, file I/O error, reference mismatch, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AuditFailed => write!(f, "Audit Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license auditing.
///
/// A failed audit is not an error; it is reported through
/// `AuditVerdict::Failed`. These variants cover configuration and I/O problems
/// that abort the run.
#[derive(Debug, Error)]
pub enum LicensingError {
    #[error("Failed to parse requirements document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the document uses the licensing requirements schema")]
    RequirementsParseError { path: PathBuf, details: String },

    #[error("Failed to parse dependency manifest: {path}\nDetails: {details}\n\n💡 Hint: The manifest must contain a `dependencies` list of {{artifactId, name, licenses}} records")]
    DependencyManifestError { path: PathBuf, details: String },

    #[error("Resource not found: {name}\nSearched: {searched}\n\n💡 Hint: Add the directory holding the file with --resource-dir")]
    ResourceNotFound { name: String, searched: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the target directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Generated file differs from the existing file.\nGenerated: {generated}\nExisting: {existing}\n\n💡 Hint: Run with --overwrite to replace the existing file")]
    ReferenceMismatch { generated: PathBuf, existing: PathBuf },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
