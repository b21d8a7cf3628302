use super::*;
use crate::adapters::outbound::formatters::StructuredReportFormatter;
use crate::application::use_cases::LineEndingComparison;
use crate::licensing::domain::CoalescedLicense;
use crate::licensing::policies::{AuditVerdict, DefaultDislikePolicy, FailurePolicy};
use crate::licensing::services::ClassificationOptions;
use crate::ports::outbound::ReportFormatter;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// Mock implementations for testing
struct MockDependencyResolver {
    dependencies: Vec<ArtifactWithLicenses>,
}

impl DependencyResolver for MockDependencyResolver {
    fn resolve_dependencies(&self, _manifest_path: &Path) -> Result<Vec<ArtifactWithLicenses>> {
        Ok(self.dependencies.clone())
    }
}

#[derive(Default)]
struct MockRequirementsLoader {
    documents: HashMap<PathBuf, LicensingRequirements>,
}

impl MockRequirementsLoader {
    fn with(mut self, path: &str, requirements: LicensingRequirements) -> Self {
        self.documents.insert(PathBuf::from(path), requirements);
        self
    }
}

impl RequirementsLoader for MockRequirementsLoader {
    fn load_requirements(&self, path: &Path) -> Result<LicensingRequirements> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such document: {}", path.display()))
    }
}

#[derive(Default, Clone)]
struct InMemoryStore {
    files: Rc<RefCell<HashMap<PathBuf, Vec<u8>>>>,
}

impl InMemoryStore {
    fn put(&self, path: &str, contents: &[u8]) {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), contents.to_vec());
    }

    fn text(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(Path::new(path))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl ReportStore for InMemoryStore {
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        Ok(self.files.borrow().get(path).cloned())
    }
}

#[derive(Default)]
struct MockResourceLocator {
    resources: HashMap<String, String>,
}

impl ResourceLocator for MockResourceLocator {
    fn read_resource(&self, name: &str) -> Result<String> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Resource not found: {}", name))
    }
}

#[derive(Default, Clone)]
struct MockProgressReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MockProgressReporter {
    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.messages
            .borrow_mut()
            .push(format!("Progress: {}/{}", current, total));
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}

type TestUseCase = CheckLicensingUseCase<
    MockDependencyResolver,
    MockRequirementsLoader,
    InMemoryStore,
    MockResourceLocator,
    MockProgressReporter,
    DefaultDislikePolicy,
>;

struct Fixture {
    use_case: TestUseCase,
    store: InMemoryStore,
    reporter: MockProgressReporter,
}

fn fixture(dependencies: Vec<ArtifactWithLicenses>, loader: MockRequirementsLoader) -> Fixture {
    let store = InMemoryStore::default();
    let reporter = MockProgressReporter::default();
    let mut locator = MockResourceLocator::default();
    locator
        .resources
        .insert("MIT License".to_string(), "MIT text".to_string());
    locator
        .resources
        .insert("header.txt".to_string(), "Bundled software".to_string());

    let use_case = CheckLicensingUseCase::new(
        MockDependencyResolver { dependencies },
        loader,
        store.clone(),
        locator,
        reporter.clone(),
        DefaultDislikePolicy,
    );

    Fixture {
        use_case,
        store,
        reporter,
    }
}

fn mit_requirements() -> LicensingRequirements {
    let mut requirements = LicensingRequirements::new();
    requirements.add_coalesced_license(CoalescedLicense::new("MIT License", ["MIT license", "MIT"]));
    requirements.add_liked_license("MIT License");
    requirements
}

fn dependency(id: &str, name: &str, licenses: &[&str]) -> ArtifactWithLicenses {
    ArtifactWithLicenses::new(id, name).with_licenses(licenses.iter().copied())
}

#[test]
fn test_execute_json_passing() {
    let fixture = fixture(
        vec![dependency("a:1.0", "Alpha", &["MIT license"])],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .output_dir("target")
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(response.verdict, AuditVerdict::Passed);
    assert_eq!(response.written_files, vec![PathBuf::from("target/licensing.json")]);
    let json = fixture.store.text("target/licensing.json").unwrap();
    assert!(json.contains("\"licensing-check\": true"));
    assert!(json.contains("\"MIT License\""));
    assert!(fixture
        .reporter
        .messages()
        .iter()
        .any(|m| m.contains("Loaded licensing requirements from: req.yml")));
}

#[test]
fn test_execute_reports_missing_and_disliked() {
    let fixture = fixture(
        vec![
            dependency("a:1.0", "Alpha", &["MIT License"]),
            dependency("b:1.0", "Beta", &[]),
            dependency("c:1.0", "Gamma", &["GPL"]),
        ],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(
        response.verdict,
        AuditVerdict::Failed {
            message: "This project has 1 disliked artifact and 1 artifact missing licensing information."
                .to_string()
        }
    );
    assert_eq!(response.report.licensed_count(), 1);
    let messages = fixture.reporter.messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("The artifact b:1.0 has no license specified.")));
    assert!(messages
        .iter()
        .any(|m| m.contains("The artifact c:1.0 is only under disliked licenses") && m.contains("GPL")));
    assert!(messages.iter().any(|m| m == "Progress: 3/3"));
}

#[test]
fn test_failure_flags_suppress_failure() {
    let fixture = fixture(
        vec![dependency("b:1.0", "Beta", &[])],
        MockRequirementsLoader::default(),
    );
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .failure_policy(FailurePolicy::new(false, true))
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(response.verdict, AuditVerdict::Passed);
    assert_eq!(response.report.missing_count(), 1);
}

#[test]
fn test_requirement_sources_are_merged() {
    let mut liked = LicensingRequirements::new();
    liked.add_liked_license("MIT License");
    let mut aliases = LicensingRequirements::new();
    aliases.add_coalesced_license(CoalescedLicense::new("MIT License", ["MIT"]));

    let fixture = fixture(
        vec![dependency("a:1.0", "Alpha", &["MIT"])],
        MockRequirementsLoader::default()
            .with("liked.yml", liked)
            .with("aliases.yml", aliases),
    );
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("liked.yml")
        .requirements_path("aliases.yml")
        .classification(ClassificationOptions {
            include_only_liked_in_report: true,
            coalesce_before_liked_filter: true,
        })
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert!(response.report.is_passing());
    let licensed: Vec<_> = response.report.licensed_artifacts().collect();
    assert!(licensed[0].licenses().contains("MIT License"));
}

#[test]
fn test_unknown_requirements_source_is_an_error() {
    let fixture = fixture(vec![], MockRequirementsLoader::default());
    let request = AuditRequest::builder()
        .requirements_path("absent.yml")
        .build()
        .unwrap();

    assert!(fixture.use_case.execute(&request).is_err());
}

#[test]
fn test_without_manifest_only_supplemental_artifacts() {
    let mut requirements = mit_requirements();
    requirements.add_missing_artifact(dependency("s:1.0", "Shaded", &["MIT"]));
    let fixture = fixture(
        vec![dependency("ignored:1.0", "Ignored", &[])],
        MockRequirementsLoader::default().with("req.yml", requirements),
    );
    let request = AuditRequest::builder()
        .requirements_path("req.yml")
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(response.report.licensed_count(), 1);
    assert_eq!(response.report.missing_count(), 0);
}

#[test]
fn test_execute_text_writes_notice_and_license_list() {
    let fixture = fixture(
        vec![dependency("a:1.0", "Alpha", &["MIT License"])],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .format(OutputFormat::Text)
        .output_dir("out")
        .prepend_text(Some("header.txt".to_string()))
        .list_report(Some("LICENSES.txt".to_string()))
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(
        response.written_files,
        vec![PathBuf::from("out/THIRD-PARTY.txt"), PathBuf::from("out/LICENSES.txt")]
    );
    assert_eq!(
        fixture.store.text("out/THIRD-PARTY.txt").unwrap(),
        "Bundled software\r\n\r\nThird-party licenses\r\n--------------------\r\n\r\n\
         MIT License\r\n  Alpha\r\n\r\n"
    );
    let list = fixture.store.text("out/LICENSES.txt").unwrap();
    assert!(list.contains("MIT License\r\n"));
    assert!(list.contains("MIT text\r\n"));
}

#[test]
fn test_reference_confirmed() {
    let fixture = fixture(
        vec![dependency("a:1.0", "Alpha", &["MIT License"])],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    fixture.store.put(
        "NOTICE.txt",
        b"Third-party licenses\r\n--------------------\r\n\r\nMIT License\r\n  Alpha\r\n\r\n",
    );
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .format(OutputFormat::Text)
        .check_existing_notice_file(Some(PathBuf::from("NOTICE.txt")))
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(
        response.reconciled,
        vec![(PathBuf::from("NOTICE.txt"), ReconcileOutcome::Confirmed)]
    );
    assert!(fixture
        .reporter
        .messages()
        .iter()
        .any(|m| m.contains("File confirmed: NOTICE.txt")));
}

#[test]
fn test_reference_mismatch_fails_run() {
    let fixture = fixture(
        vec![dependency("a:1.0", "Alpha", &["MIT License"])],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    fixture.store.put("NOTICE.txt", b"stale");
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .format(OutputFormat::Text)
        .check_existing_notice_file(Some(PathBuf::from("NOTICE.txt")))
        .build()
        .unwrap();

    let err = fixture.use_case.execute(&request).unwrap_err();

    assert!(err.to_string().contains("Generated file differs from the existing file."));
    assert_eq!(fixture.store.text("NOTICE.txt").unwrap(), "stale");
}

#[test]
fn test_reference_overwritten() {
    let fixture = fixture(
        vec![dependency("a:1.0", "Alpha", &["MIT License"])],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    fixture.store.put("NOTICE.txt", b"stale");
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .format(OutputFormat::Text)
        .check_existing_notice_file(Some(PathBuf::from("NOTICE.txt")))
        .overwrite(true)
        .line_ending_comparison(LineEndingComparison::Exact)
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(response.reconciled[0].1, ReconcileOutcome::Overwritten);
    assert_eq!(
        fixture.store.text("NOTICE.txt"),
        fixture.store.text("target/THIRD-PARTY.txt")
    );
}

#[test]
fn test_merge_report_folds_buckets() {
    let fixture = fixture(
        vec![dependency("a:1.0", "Alpha", &["MIT License"])],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    let mut earlier = LicensingReport::new();
    earlier.add_missing_license(ArtifactWithLicenses::new("sub:1.0", "Submodule dep"));
    let content = StructuredReportFormatter::new().format(&earlier).unwrap();
    fixture.store.put("module/licensing.json", content.as_bytes());

    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .merge_report_paths(vec![PathBuf::from("module/licensing.json")])
        .build()
        .unwrap();

    let response = fixture.use_case.execute(&request).unwrap();

    assert_eq!(response.report.licensed_count(), 1);
    assert_eq!(response.report.missing_count(), 1);
    assert!(response.verdict.is_failed());
}

#[test]
fn test_merge_report_missing_file_is_an_error() {
    let fixture = fixture(vec![], MockRequirementsLoader::default());
    let request = AuditRequest::builder()
        .merge_report_paths(vec![PathBuf::from("absent.json")])
        .build()
        .unwrap();

    let err = fixture.use_case.execute(&request).unwrap_err();

    assert!(err.to_string().contains("Report to merge not found: absent.json"));
}

#[test]
fn test_classification_summary_reported_on_completion() {
    let fixture = fixture(
        vec![
            dependency("a:1.0", "Alpha", &["MIT License"]),
            dependency("b:1.0", "Beta", &[]),
        ],
        MockRequirementsLoader::default().with("req.yml", mit_requirements()),
    );
    let request = AuditRequest::builder()
        .dependencies_path("deps.json")
        .requirements_path("req.yml")
        .failure_policy(FailurePolicy::new(false, false))
        .build()
        .unwrap();

    fixture.use_case.execute(&request).unwrap();

    assert!(fixture.reporter.messages().contains(
        &"Completed: ✅ Classified 2 artifact(s): 1 licensed, 1 missing, 0 disliked".to_string()
    ));
}
