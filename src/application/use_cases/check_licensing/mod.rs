use crate::application::dto::{AuditRequest, AuditResponse, OutputFormat};
use crate::application::factories::FormatterFactory;
use crate::application::use_cases::{ReconcileOutcome, ReferenceReconciler};
use crate::licensing::domain::{ArtifactWithLicenses, LicensingReport, LicensingRequirements};
use crate::licensing::services::{Bucket, Classification, ReportGenerator};
use crate::ports::outbound::{
    DependencyResolver, DislikePolicy, ProgressReporter, ReportStore, RequirementsLoader,
    ResourceLocator,
};
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// CheckLicensingUseCase - Core use case for auditing dependency licenses
///
/// Orchestrates one audit run: load and merge requirements, resolve
/// dependencies, classify, fold in earlier reports, render, reconcile and
/// derive the verdict. All infrastructure is injected through ports.
///
/// # Type Parameters
/// * `DR` - DependencyResolver implementation
/// * `RL` - RequirementsLoader implementation
/// * `RS` - ReportStore implementation
/// * `LOC` - ResourceLocator implementation
/// * `PR` - ProgressReporter implementation
/// * `DP` - DislikePolicy implementation
pub struct CheckLicensingUseCase<DR, RL, RS, LOC, PR, DP> {
    dependency_resolver: DR,
    requirements_loader: RL,
    report_store: RS,
    resource_locator: LOC,
    progress_reporter: PR,
    dislike_policy: DP,
}

impl<DR, RL, RS, LOC, PR, DP> CheckLicensingUseCase<DR, RL, RS, LOC, PR, DP>
where
    DR: DependencyResolver,
    RL: RequirementsLoader,
    RS: ReportStore,
    LOC: ResourceLocator,
    PR: ProgressReporter,
    DP: DislikePolicy,
{
    /// Creates a new CheckLicensingUseCase with injected dependencies
    pub fn new(
        dependency_resolver: DR,
        requirements_loader: RL,
        report_store: RS,
        resource_locator: LOC,
        progress_reporter: PR,
        dislike_policy: DP,
    ) -> Self {
        Self {
            dependency_resolver,
            requirements_loader,
            report_store,
            resource_locator,
            progress_reporter,
            dislike_policy,
        }
    }

    /// Executes the licensing check
    ///
    /// A failed audit is returned as `AuditVerdict::Failed` inside the
    /// response, not as an error.
    ///
    /// # Errors
    /// Returns an error if a document cannot be loaded, a report cannot be
    /// rendered or written, or a reference file differs without overwrite
    pub fn execute(&self, request: &AuditRequest) -> Result<AuditResponse> {
        // Step 1: Merge requirement sources
        let requirements = self.load_requirements(&request.requirements_paths)?;

        // Step 2: Resolve dependencies
        let dependencies = self.resolve_dependencies(request.dependencies_path.as_deref())?;

        // Step 3: Classify
        let mut report = self.classify(&requirements, &dependencies, request);

        // Step 4: Fold in earlier reports
        self.merge_reports(&mut report, &request.merge_report_paths)?;

        // Step 5: Render, write and reconcile
        let mut written_files = Vec::new();
        let mut reconciled = Vec::new();
        self.progress_reporter
            .report(FormatterFactory::progress_message(request.format));
        match request.format {
            OutputFormat::Json => {
                let content =
                    FormatterFactory::create(request, &self.resource_locator).format(&report)?;
                written_files.push(self.write_report(&request.output_path(), &content)?);
            }
            OutputFormat::Text => {
                self.render_text_reports(&report, request, &mut written_files, &mut reconciled)?;
            }
        }

        // Step 6: Verdict
        let verdict = request.failure_policy.evaluate(&report);

        Ok(AuditResponse::new(report, written_files, reconciled, verdict))
    }

    fn load_requirements(&self, paths: &[PathBuf]) -> Result<LicensingRequirements> {
        let mut requirements = LicensingRequirements::new();
        for path in paths {
            let source = self.requirements_loader.load_requirements(path)?;
            requirements.combine_with(source);
            self.progress_reporter
                .report(&format!("📖 Loaded licensing requirements from: {}", path.display()));
        }
        Ok(requirements)
    }

    fn resolve_dependencies(&self, manifest: Option<&Path>) -> Result<Vec<ArtifactWithLicenses>> {
        let Some(manifest) = manifest else {
            self.progress_reporter
                .report("ℹ️  No dependency manifest given; auditing supplemental artifacts only");
            return Ok(Vec::new());
        };

        let dependencies = self.dependency_resolver.resolve_dependencies(manifest)?;
        self.progress_reporter
            .report(&format!("✅ Detected {} dependency record(s)", dependencies.len()));
        Ok(dependencies)
    }

    fn classify(
        &self,
        requirements: &LicensingRequirements,
        dependencies: &[ArtifactWithLicenses],
        request: &AuditRequest,
    ) -> LicensingReport {
        let generator =
            ReportGenerator::new(requirements, &self.dislike_policy, request.classification);
        let total = generator.artifact_count(dependencies);
        let mut current = 0;

        self.progress_reporter.report("🔍 Classifying artifacts...");
        let report = generator.generate_with(dependencies, |classification| {
            current += 1;
            self.report_classification(classification);
            self.progress_reporter.report_progress(
                current,
                total,
                Some(classification.artifact().artifact_id().as_str()),
            );
        });

        self.progress_reporter.report_completion(&format!(
            "✅ Classified {} artifact(s): {} licensed, {} missing, {} disliked",
            total,
            report.licensed_count(),
            report.missing_count(),
            report.disliked_count()
        ));
        report
    }

    fn report_classification(&self, classification: &Classification) {
        let artifact_id = classification.artifact().artifact_id();
        match classification.bucket() {
            Bucket::Missing => self.progress_reporter.report_error(&format!(
                "⚠️  Licensing: The artifact {} has no license specified.",
                artifact_id
            )),
            Bucket::Disliked => self.progress_reporter.report_error(&format!(
                "⚠️  Licensing: The artifact {} is only under disliked licenses: {:?}",
                artifact_id,
                classification.raw_licenses()
            )),
            Bucket::Licensed => {}
        }
    }

    fn merge_reports(&self, report: &mut LicensingReport, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            let bytes = self
                .report_store
                .read_file(path)?
                .with_context(|| format!("Report to merge not found: {}", path.display()))?;
            let content = String::from_utf8(bytes)
                .with_context(|| format!("Report to merge is not UTF-8: {}", path.display()))?;
            let other = FormatterFactory::parse_structured(&content)
                .with_context(|| format!("Failed to parse report to merge: {}", path.display()))?;

            report.combine_with(other);
            self.progress_reporter
                .report(&format!("🔗 Merged report: {}", path.display()));
        }
        Ok(())
    }

    fn render_text_reports(
        &self,
        report: &LicensingReport,
        request: &AuditRequest,
        written_files: &mut Vec<PathBuf>,
        reconciled: &mut Vec<(PathBuf, ReconcileOutcome)>,
    ) -> Result<()> {
        let reconciler = ReferenceReconciler::new(
            &self.report_store,
            request.overwrite,
            request.line_ending_comparison,
        );

        let notice = FormatterFactory::create(request, &self.resource_locator).format(report)?;
        let notice_path = self.write_report(&request.output_path(), &notice)?;
        if let Some(reference) = &request.check_existing_notice_file {
            let outcome = self.reconcile(&reconciler, &notice_path, &notice, reference)?;
            reconciled.push((reference.clone(), outcome));
        }
        written_files.push(notice_path);

        if let Some(list_path) = request.list_report_path() {
            let licenses = FormatterFactory::create_license_list(request, &self.resource_locator)
                .format(report)?;
            let list_path = self.write_report(&list_path, &licenses)?;
            if let Some(reference) = &request.check_existing_licenses_file {
                let outcome = self.reconcile(&reconciler, &list_path, &licenses, reference)?;
                reconciled.push((reference.clone(), outcome));
            }
            written_files.push(list_path);
        }

        Ok(())
    }

    fn write_report(&self, path: &Path, content: &str) -> Result<PathBuf> {
        self.report_store.write_file(path, content.as_bytes())?;
        self.progress_reporter
            .report(&format!("📝 Wrote report: {}", path.display()));
        Ok(path.to_path_buf())
    }

    fn reconcile(
        &self,
        reconciler: &ReferenceReconciler<'_, RS>,
        generated_path: &Path,
        generated: &str,
        reference: &Path,
    ) -> Result<ReconcileOutcome> {
        let outcome = reconciler.reconcile(generated_path, generated.as_bytes(), reference)?;
        let message = match outcome {
            ReconcileOutcome::Confirmed => format!("✅ File confirmed: {}", reference.display()),
            ReconcileOutcome::Overwritten => format!("🔄 Replaced {}", reference.display()),
        };
        self.progress_reporter.report(&message);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests;
