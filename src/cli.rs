use clap::Parser;
use license_audit::application::dto::{AuditRequest, OutputFormat};
use license_audit::application::use_cases::LineEndingComparison;
use license_audit::licensing::policies::FailurePolicy;
use license_audit::licensing::services::ClassificationOptions;
use license_audit::shared::Result;
use std::path::PathBuf;

use crate::config::ConfigFile;

/// Audit the licenses of a project's dependencies
#[derive(Parser, Debug, Default)]
#[command(name = "license-audit")]
#[command(version)]
#[command(
    about = "Audit dependency licenses against licensing requirements and maintain notice files",
    long_about = None
)]
pub struct Args {
    /// Dependency manifest ({ dependencies: [{artifactId, name, licenses}] })
    #[arg(short, long, value_name = "PATH")]
    pub dependencies: Option<PathBuf>,

    /// Licensing requirements document; later documents merge into earlier ones.
    /// Can be specified multiple times: -r base.yml -r project.yml
    #[arg(short, long = "requirements", value_name = "PATH")]
    pub requirements: Vec<PathBuf>,

    /// Directory receiving the generated reports (defaults to "target")
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report file name (defaults to licensing.json or THIRD-PARTY.txt)
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Output format: json or text
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Also write the full license texts to this file name (text format only)
    #[arg(long, value_name = "NAME")]
    pub list_report: Option<String>,

    /// Resource emitted before the notice body
    #[arg(long, value_name = "RESOURCE")]
    pub prepend_text: Option<String>,

    /// Resource emitted after the notice body
    #[arg(long, value_name = "RESOURCE")]
    pub append_text: Option<String>,

    /// Resource emitted before the license list
    #[arg(long, value_name = "RESOURCE")]
    pub list_prepend_text: Option<String>,

    /// Committed notice file the generated notice must match
    #[arg(long, value_name = "PATH")]
    pub check_existing_notice_file: Option<PathBuf>,

    /// Committed license list the generated list must match
    #[arg(long, value_name = "PATH")]
    pub check_existing_licenses_file: Option<PathBuf>,

    /// Replace reference files that differ instead of failing
    #[arg(long)]
    pub overwrite: bool,

    /// Ignore CRLF/LF differences when comparing reference files
    #[arg(long)]
    pub normalize_line_endings: bool,

    /// Fail when artifacts have no license (default: true)
    #[arg(long, value_name = "BOOL")]
    pub fail_on_missing: Option<bool>,

    /// Fail when artifacts are only under disliked licenses (default: true)
    #[arg(long, value_name = "BOOL")]
    pub fail_on_disliked: Option<bool>,

    /// Keep only liked licenses in the report when liked licenses are declared (default: true)
    #[arg(long, value_name = "BOOL")]
    pub include_only_liked: Option<bool>,

    /// Canonicalize dependency license names before the liked filter
    #[arg(long)]
    pub coalesce_before_liked_filter: bool,

    /// Directory searched for license texts and text blocks.
    /// Can be specified multiple times
    #[arg(long = "resource-dir", value_name = "DIR")]
    pub resource_dirs: Vec<PathBuf>,

    /// Earlier structured report to fold into this one.
    /// Can be specified multiple times
    #[arg(long = "merge-report", value_name = "PATH")]
    pub merge_reports: Vec<PathBuf>,

    /// Config file (defaults to ./license-audit.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the licensing check entirely
    #[arg(long)]
    pub skip: bool,
}

impl Args {
    /// Fills every option not given on the command line from `config`.
    pub fn apply_config(mut self, config: ConfigFile) -> Result<Self> {
        let config_format = config.output_format()?;

        self.dependencies = self.dependencies.or(config.dependencies);
        if self.requirements.is_empty() {
            self.requirements = config.requirements.unwrap_or_default();
        }
        self.output_dir = self.output_dir.or(config.output_dir);
        self.output = self.output.or(config.output);
        self.format = self.format.or(config_format);
        self.list_report = self.list_report.or(config.list_report);
        self.prepend_text = self.prepend_text.or(config.prepend_text);
        self.append_text = self.append_text.or(config.append_text);
        self.list_prepend_text = self.list_prepend_text.or(config.list_prepend_text);
        self.check_existing_notice_file = self
            .check_existing_notice_file
            .or(config.check_existing_notice_file);
        self.check_existing_licenses_file = self
            .check_existing_licenses_file
            .or(config.check_existing_licenses_file);
        self.overwrite |= config.overwrite.unwrap_or(false);
        self.normalize_line_endings |= config.normalize_line_endings.unwrap_or(false);
        self.fail_on_missing = self.fail_on_missing.or(config.fail_on_missing);
        self.fail_on_disliked = self.fail_on_disliked.or(config.fail_on_disliked);
        self.include_only_liked = self.include_only_liked.or(config.include_only_liked);
        self.coalesce_before_liked_filter |= config.coalesce_before_liked_filter.unwrap_or(false);
        if self.resource_dirs.is_empty() {
            self.resource_dirs = config.resource_dirs.unwrap_or_default();
        }
        if self.merge_reports.is_empty() {
            self.merge_reports = config.merge_reports.unwrap_or_default();
        }
        self.skip |= config.skip.unwrap_or(false);

        Ok(self)
    }

    /// Builds the validated audit request.
    pub fn to_request(&self) -> Result<AuditRequest> {
        let mut builder = AuditRequest::builder()
            .requirements_paths(self.requirements.clone())
            .merge_report_paths(self.merge_reports.clone())
            .output_file_name(self.output.clone())
            .format(self.format.unwrap_or_default())
            .list_report(self.list_report.clone())
            .prepend_text(self.prepend_text.clone())
            .append_text(self.append_text.clone())
            .list_prepend_text(self.list_prepend_text.clone())
            .check_existing_notice_file(self.check_existing_notice_file.clone())
            .check_existing_licenses_file(self.check_existing_licenses_file.clone())
            .overwrite(self.overwrite)
            .line_ending_comparison(if self.normalize_line_endings {
                LineEndingComparison::Normalized
            } else {
                LineEndingComparison::Exact
            })
            .classification(ClassificationOptions {
                include_only_liked_in_report: self.include_only_liked.unwrap_or(true),
                coalesce_before_liked_filter: self.coalesce_before_liked_filter,
            })
            .failure_policy(FailurePolicy::new(
                self.fail_on_missing.unwrap_or(true),
                self.fail_on_disliked.unwrap_or(true),
            ));

        if let Some(dependencies) = &self.dependencies {
            builder = builder.dependencies_path(dependencies);
        }
        if let Some(output_dir) = &self.output_dir {
            builder = builder.output_dir(output_dir);
        }

        builder.build()
    }
}
