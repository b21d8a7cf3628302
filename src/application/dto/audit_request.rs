use super::OutputFormat;
use crate::application::use_cases::LineEndingComparison;
use crate::licensing::policies::FailurePolicy;
use crate::licensing::services::ClassificationOptions;
use crate::shared::error::LicensingError;
use crate::shared::Result;
use std::path::PathBuf;

/// AuditRequest - Request DTO for the licensing check use case
///
/// Built through [`AuditRequestBuilder`], which rejects inconsistent option
/// combinations before any file is touched.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Dependency manifest; without one only supplemental artifacts are audited
    pub dependencies_path: Option<PathBuf>,
    /// Requirement documents, merged in order
    pub requirements_paths: Vec<PathBuf>,
    /// Previously generated structured reports folded into the result
    pub merge_report_paths: Vec<PathBuf>,
    pub output_dir: PathBuf,
    /// Main report file name; defaults per format
    pub output_file_name: Option<String>,
    pub format: OutputFormat,
    /// File name of the full-text license list (text format only)
    pub list_report: Option<String>,
    pub prepend_text: Option<String>,
    pub append_text: Option<String>,
    pub list_prepend_text: Option<String>,
    /// Reference the notice file is reconciled against
    pub check_existing_notice_file: Option<PathBuf>,
    /// Reference the license-list file is reconciled against
    pub check_existing_licenses_file: Option<PathBuf>,
    /// Replace differing references instead of failing
    pub overwrite: bool,
    pub line_ending_comparison: LineEndingComparison,
    pub classification: ClassificationOptions,
    pub failure_policy: FailurePolicy,
}

impl AuditRequest {
    pub fn builder() -> AuditRequestBuilder {
        AuditRequestBuilder::default()
    }

    /// Path of the main report file.
    pub fn output_path(&self) -> PathBuf {
        let file_name = self
            .output_file_name
            .as_deref()
            .unwrap_or_else(|| self.format.default_file_name());
        self.output_dir.join(file_name)
    }

    /// Path of the license-list file, when one is requested.
    pub fn list_report_path(&self) -> Option<PathBuf> {
        self.list_report
            .as_ref()
            .map(|file_name| self.output_dir.join(file_name))
    }
}

/// Builder for [`AuditRequest`]
#[derive(Debug, Clone)]
pub struct AuditRequestBuilder {
    request: AuditRequest,
}

impl Default for AuditRequestBuilder {
    fn default() -> Self {
        Self {
            request: AuditRequest {
                dependencies_path: None,
                requirements_paths: Vec::new(),
                merge_report_paths: Vec::new(),
                output_dir: PathBuf::from("target"),
                output_file_name: None,
                format: OutputFormat::default(),
                list_report: None,
                prepend_text: None,
                append_text: None,
                list_prepend_text: None,
                check_existing_notice_file: None,
                check_existing_licenses_file: None,
                overwrite: false,
                line_ending_comparison: LineEndingComparison::default(),
                classification: ClassificationOptions {
                    include_only_liked_in_report: true,
                    coalesce_before_liked_filter: false,
                },
                failure_policy: FailurePolicy::default(),
            },
        }
    }
}

impl AuditRequestBuilder {
    pub fn dependencies_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.dependencies_path = Some(path.into());
        self
    }

    pub fn requirements_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.requirements_paths.push(path.into());
        self
    }

    pub fn requirements_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.request.requirements_paths = paths;
        self
    }

    pub fn merge_report_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.request.merge_report_paths = paths;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.request.output_dir = dir.into();
        self
    }

    pub fn output_file_name(mut self, name: Option<String>) -> Self {
        self.request.output_file_name = name;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.request.format = format;
        self
    }

    pub fn list_report(mut self, name: Option<String>) -> Self {
        self.request.list_report = name;
        self
    }

    pub fn prepend_text(mut self, resource: Option<String>) -> Self {
        self.request.prepend_text = resource;
        self
    }

    pub fn append_text(mut self, resource: Option<String>) -> Self {
        self.request.append_text = resource;
        self
    }

    pub fn list_prepend_text(mut self, resource: Option<String>) -> Self {
        self.request.list_prepend_text = resource;
        self
    }

    pub fn check_existing_notice_file(mut self, path: Option<PathBuf>) -> Self {
        self.request.check_existing_notice_file = path;
        self
    }

    pub fn check_existing_licenses_file(mut self, path: Option<PathBuf>) -> Self {
        self.request.check_existing_licenses_file = path;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.request.overwrite = overwrite;
        self
    }

    pub fn line_ending_comparison(mut self, comparison: LineEndingComparison) -> Self {
        self.request.line_ending_comparison = comparison;
        self
    }

    pub fn classification(mut self, options: ClassificationOptions) -> Self {
        self.request.classification = options;
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.request.failure_policy = policy;
        self
    }

    /// Validates the option combination and returns the request
    ///
    /// # Errors
    /// Returns `LicensingError::Validation` if:
    /// - a requirements path is empty
    /// - a list report or reference file is requested with the JSON format
    /// - a license-list reference is given without a list report
    pub fn build(self) -> Result<AuditRequest> {
        let request = self.request;

        if let Some(index) = request
            .requirements_paths
            .iter()
            .position(|path| path.as_os_str().is_empty())
        {
            return Err(validation(format!(
                "requirements path #{} must not be empty",
                index + 1
            )));
        }

        if request.format != OutputFormat::Text {
            let text_only = [
                ("--list-report", request.list_report.is_some()),
                (
                    "--check-existing-notice-file",
                    request.check_existing_notice_file.is_some(),
                ),
                (
                    "--check-existing-licenses-file",
                    request.check_existing_licenses_file.is_some(),
                ),
            ];
            if let Some((option, _)) = text_only.iter().find(|(_, set)| *set) {
                return Err(validation(format!(
                    "{} requires the text format (--format text)",
                    option
                )));
            }
        }

        if request.check_existing_licenses_file.is_some() && request.list_report.is_none() {
            return Err(validation(
                "--check-existing-licenses-file requires --list-report".to_string(),
            ));
        }

        Ok(request)
    }
}

fn validation(message: String) -> anyhow::Error {
    LicensingError::Validation { message }.into()
}
