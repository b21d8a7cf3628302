/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the audit core needs from the outside world:
/// dependency records, requirement documents, resource texts, storage and
/// the console.
pub mod dependency_resolver;
pub mod dislike_policy;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_store;
pub mod requirements_loader;
pub mod resource_locator;

pub use dependency_resolver::DependencyResolver;
pub use dislike_policy::DislikePolicy;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_store::ReportStore;
pub use requirements_loader::RequirementsLoader;
pub use resource_locator::ResourceLocator;
