/// Mock implementations for testing
mod mock_dependency_resolver;
mod mock_progress_reporter;
mod mock_report_store;
mod mock_requirements_loader;
mod mock_resource_locator;

pub use mock_dependency_resolver::MockDependencyResolver;
pub use mock_progress_reporter::{MockProgressReporter, Reported};
pub use mock_report_store::MockReportStore;
pub use mock_requirements_loader::MockRequirementsLoader;
pub use mock_resource_locator::MockResourceLocator;
