//! license-audit - dependency license auditing
//!
//! This library normalizes the license names declared by a project's
//! dependencies, classifies every artifact as licensed, missing or disliked,
//! renders notice files and reconciles them with committed copies. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`licensing`): Requirements model, classification and policies
//! - **Application Layer** (`application`): Use cases, DTOs and formatter factory
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_audit::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let reader = FileSystemReader::new();
//! let store = FileSystemStore::new();
//! let locator = DirectoryResourceLocator::new(vec!["licenses".into()]);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CheckLicensingUseCase::new(
//!     reader.clone(),
//!     reader,
//!     store,
//!     locator,
//!     progress_reporter,
//!     DefaultDislikePolicy,
//! );
//!
//! // Execute
//! let request = AuditRequest::builder()
//!     .dependencies_path("dependencies.json")
//!     .requirements_path("licensing-requirements.yml")
//!     .format(OutputFormat::Text)
//!     .build()?;
//! let response = use_case.execute(&request)?;
//!
//! if let AuditVerdict::Failed { message } = &response.verdict {
//!     eprintln!("{}", message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod licensing;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryResourceLocator, FileSystemReader, FileSystemStore,
    };
    pub use crate::adapters::outbound::formatters::{
        LineTerminator, StructuredReportFormatter, TextReportFormatter, TextReportOptions,
    };
    pub use crate::application::dto::{AuditRequest, AuditResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{
        CheckLicensingUseCase, LineEndingComparison, ReconcileOutcome, ReferenceReconciler,
    };
    pub use crate::licensing::domain::{
        ArtifactId, ArtifactWithLicenses, CoalescedLicense, DualLicense, LicensingReport,
        LicensingRequirements,
    };
    pub use crate::licensing::policies::{AuditVerdict, DefaultDislikePolicy, FailurePolicy};
    pub use crate::licensing::services::{
        Bucket, Classification, ClassificationOptions, ReportGenerator,
    };
    pub use crate::ports::outbound::{
        DependencyResolver, DislikePolicy, ProgressReporter, ReportFormatter, ReportStore,
        RequirementsLoader, ResourceLocator,
    };
    pub use crate::shared::Result;
}
