use crate::licensing::domain::license_name::compare_ignore_case;
use crate::licensing::domain::LicensingReport;
use crate::ports::outbound::{ReportFormatter, ResourceLocator};
use crate::shared::Result;
use anyhow::Context;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Separator framing each license in the full-text layout
pub const RULE: &str =
    "------------------------------------------------------------------------------";

const HEADER: &str = "Third-party licenses";
const HEADER_UNDERLINE: &str = "--------------------";
const MULTI_LICENSED_HEADER: &str = "Dependencies with multiple licenses";
const MULTI_LICENSED_UNDERLINE: &str = "-----------------------------------";

/// Line terminator written after every line of a text report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    #[default]
    CrLf,
    Lf,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Lf => "\n",
        }
    }
}

/// Layout switches for [`TextReportFormatter`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextReportOptions {
    /// Append the "Dependencies with multiple licenses" section (compact layout only)
    pub list_multi_licensed: bool,
    /// Emit each license's full text instead of its artifact list
    pub include_full_license_text: bool,
    /// Resource emitted before the body
    pub prefix: Option<String>,
    /// Resource emitted after the body
    pub suffix: Option<String>,
    pub line_terminator: LineTerminator,
}

impl TextReportOptions {
    /// Compact per-license artifact listing (the notice file).
    pub fn notice(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self {
            list_multi_licensed: true,
            include_full_license_text: false,
            prefix,
            suffix,
            line_terminator: LineTerminator::default(),
        }
    }

    /// Concatenated full license texts (the license-list file).
    pub fn license_list(prefix: Option<String>) -> Self {
        Self {
            list_multi_licensed: false,
            include_full_license_text: true,
            prefix,
            suffix: None,
            line_terminator: LineTerminator::default(),
        }
    }
}

/// Sort key ordering and de-duplicating names case-insensitively; the first
/// spelling inserted is kept
#[derive(Debug, Clone)]
struct CaseInsensitive(String);

impl PartialEq for CaseInsensitive {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CaseInsensitive {}

impl PartialOrd for CaseInsensitive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CaseInsensitive {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.0, &other.0)
    }
}

type Grouping = BTreeMap<CaseInsensitive, BTreeSet<CaseInsensitive>>;

struct TextWriter {
    output: String,
    terminator: &'static str,
}

impl TextWriter {
    fn new(terminator: LineTerminator) -> Self {
        Self {
            output: String::new(),
            terminator: terminator.as_str(),
        }
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push_str(self.terminator);
    }

    fn blank(&mut self) {
        self.output.push_str(self.terminator);
    }

    /// Re-emits every line of `text` with this writer's terminator.
    fn text_lines(&mut self, text: &str) {
        for line in split_lines(text) {
            self.line(line);
        }
    }
}

/// Splits on `\r\n`, `\r` or `\n`; trailing empty lines are dropped.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(index) = rest.find(['\r', '\n']) {
        lines.push(&rest[..index]);
        let skip = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[index + skip..];
    }
    lines.push(rest);

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// TextReportFormatter adapter rendering the human-readable license report
///
/// Only the licensed bucket is rendered. License texts and the prefix/suffix
/// blocks are read through the injected [`ResourceLocator`].
pub struct TextReportFormatter<L: ResourceLocator> {
    locator: L,
    options: TextReportOptions,
}

impl<L: ResourceLocator> TextReportFormatter<L> {
    pub fn new(locator: L, options: TextReportOptions) -> Self {
        Self { locator, options }
    }

    pub fn options(&self) -> &TextReportOptions {
        &self.options
    }

    fn boilerplate(&self, writer: &mut TextWriter, resource: Option<&str>) -> Result<()> {
        let Some(name) = resource.filter(|name| !name.trim().is_empty()) else {
            return Ok(());
        };
        let text = self
            .locator
            .read_resource(name)
            .with_context(|| format!("Failed to read text block '{}'", name))?;
        writer.text_lines(&text);
        writer.blank();
        Ok(())
    }

    fn group(report: &LicensingReport) -> (Grouping, Grouping) {
        let mut artifacts_per_license = Grouping::new();
        let mut multi_licensed = Grouping::new();

        for artifact in report.licensed_artifacts() {
            let name = CaseInsensitive(artifact.display_name().to_string());
            let licenses: BTreeSet<_> = artifact
                .licenses()
                .iter()
                .map(|license| CaseInsensitive(license.clone()))
                .collect();
            for license in &licenses {
                artifacts_per_license
                    .entry(license.clone())
                    .or_default()
                    .insert(name.clone());
            }
            // Spellings differing only in case count as one license
            if licenses.len() > 1 {
                multi_licensed.entry(name).or_default().extend(licenses);
            }
        }

        (artifacts_per_license, multi_licensed)
    }

    fn compact_body(&self, writer: &mut TextWriter, report: &LicensingReport) {
        let (artifacts_per_license, multi_licensed) = Self::group(report);

        writer.line(HEADER);
        writer.line(HEADER_UNDERLINE);
        for (license, artifacts) in &artifacts_per_license {
            writer.blank();
            writer.line(&license.0);
            for artifact in artifacts {
                writer.line(&format!("  {}", artifact.0));
            }
        }
        writer.blank();

        if self.options.list_multi_licensed && !multi_licensed.is_empty() {
            writer.line(MULTI_LICENSED_HEADER);
            writer.line(MULTI_LICENSED_UNDERLINE);
            for (artifact, licenses) in &multi_licensed {
                writer.blank();
                writer.line(&artifact.0);
                for license in licenses {
                    writer.line(&format!("  {}", license.0));
                }
            }
            writer.blank();
        }
    }

    fn full_text_body(&self, writer: &mut TextWriter, report: &LicensingReport) -> Result<()> {
        let (artifacts_per_license, _) = Self::group(report);

        for license in artifacts_per_license.keys() {
            let text = self
                .locator
                .read_resource(&license.0)
                .with_context(|| format!("Failed to read license text for '{}'", license.0))?;
            writer.line(RULE);
            writer.line(&license.0);
            writer.line(RULE);
            writer.blank();
            writer.text_lines(&text);
            writer.blank();
        }
        writer.blank();
        Ok(())
    }
}

impl<L: ResourceLocator> ReportFormatter for TextReportFormatter<L> {
    fn format(&self, report: &LicensingReport) -> Result<String> {
        let mut writer = TextWriter::new(self.options.line_terminator);

        self.boilerplate(&mut writer, self.options.prefix.as_deref())?;
        if self.options.include_full_license_text {
            self.full_text_body(&mut writer, report)?;
        } else {
            self.compact_body(&mut writer, report);
        }
        self.boilerplate(&mut writer, self.options.suffix.as_deref())?;

        Ok(writer.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::licensing::domain::ArtifactWithLicenses;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapLocator {
        resources: HashMap<String, String>,
    }

    impl MapLocator {
        fn with(mut self, name: &str, text: &str) -> Self {
            self.resources.insert(name.to_string(), text.to_string());
            self
        }
    }

    impl ResourceLocator for MapLocator {
        fn read_resource(&self, name: &str) -> Result<String> {
            self.resources
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Resource not found: {}", name))
        }
    }

    fn report() -> LicensingReport {
        let mut report = LicensingReport::new();
        report.add_licensed_artifact(
            ArtifactWithLicenses::new("w:1", "Widget").with_licenses(["MIT", "Apache-2.0"]),
        );
        report.add_licensed_artifact(ArtifactWithLicenses::new("a:1", "alpha").with_licenses(["mit"]));
        report.add_licensed_artifact(ArtifactWithLicenses::new("b:1", "").with_licenses(["BSD"]));
        report.add_missing_license(ArtifactWithLicenses::new("m:1", "Missing"));
        report
    }

    #[test]
    fn test_split_lines_handles_every_line_ending() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_compact_layout() {
        let formatter =
            TextReportFormatter::new(MapLocator::default(), TextReportOptions::notice(None, None));

        let output = formatter.format(&report()).unwrap();

        let expected = [
            "Third-party licenses",
            "--------------------",
            "",
            "Apache-2.0",
            "  Widget",
            "",
            "BSD",
            "  b:1",
            "",
            "mit",
            "  alpha",
            "  Widget",
            "",
            "Dependencies with multiple licenses",
            "-----------------------------------",
            "",
            "Widget",
            "  Apache-2.0",
            "  MIT",
            "",
        ];
        assert_eq!(output, format!("{}\r\n", expected.join("\r\n")));
    }

    #[test]
    fn test_compact_layout_without_multi_license_section() {
        let options = TextReportOptions {
            list_multi_licensed: false,
            ..TextReportOptions::default()
        };
        let formatter = TextReportFormatter::new(MapLocator::default(), options);

        let output = formatter.format(&report()).unwrap();

        assert!(!output.contains("Dependencies with multiple licenses"));
        assert!(output.ends_with("  Widget\r\n\r\n"));
    }

    #[test]
    fn test_case_variants_are_not_multiple_licenses() {
        let mut report = LicensingReport::new();
        report.add_licensed_artifact(
            ArtifactWithLicenses::new("w:1", "Widget").with_licenses(["MIT", "mit"]),
        );
        let formatter =
            TextReportFormatter::new(MapLocator::default(), TextReportOptions::notice(None, None));

        let output = formatter.format(&report).unwrap();

        assert_eq!(
            output,
            "Third-party licenses\r\n--------------------\r\n\r\nMIT\r\n  Widget\r\n\r\n"
        );
    }

    #[test]
    fn test_empty_report_renders_header_only() {
        let formatter =
            TextReportFormatter::new(MapLocator::default(), TextReportOptions::notice(None, None));

        let output = formatter.format(&LicensingReport::new()).unwrap();

        assert_eq!(output, "Third-party licenses\r\n--------------------\r\n\r\n");
    }

    #[test]
    fn test_prefix_and_suffix_blocks() {
        let locator = MapLocator::default()
            .with("header.txt", "This product includes:\nthird-party software\n")
            .with("footer.txt", "End\r\n");
        let formatter = TextReportFormatter::new(
            locator,
            TextReportOptions::notice(Some("header.txt".into()), Some("footer.txt".into())),
        );

        let output = formatter.format(&LicensingReport::new()).unwrap();

        assert_eq!(
            output,
            "This product includes:\r\nthird-party software\r\n\r\n\
             Third-party licenses\r\n--------------------\r\n\r\n\
             End\r\n\r\n"
        );
    }

    #[test]
    fn test_blank_prefix_name_is_ignored() {
        let formatter = TextReportFormatter::new(
            MapLocator::default(),
            TextReportOptions::notice(Some("  ".into()), None),
        );
        assert!(formatter.format(&LicensingReport::new()).is_ok());
    }

    #[test]
    fn test_full_text_layout() {
        let mut report = LicensingReport::new();
        report.add_licensed_artifact(
            ArtifactWithLicenses::new("w:1", "Widget").with_licenses(["MIT", "BSD"]),
        );
        let locator = MapLocator::default()
            .with("MIT", "MIT text\nline two\n")
            .with("BSD", "BSD text");
        let formatter = TextReportFormatter::new(locator, TextReportOptions::license_list(None));

        let output = formatter.format(&report).unwrap();

        let expected = format!(
            "{rule}\r\nBSD\r\n{rule}\r\n\r\nBSD text\r\n\r\n\
             {rule}\r\nMIT\r\n{rule}\r\n\r\nMIT text\r\nline two\r\n\r\n\r\n",
            rule = RULE
        );
        assert_eq!(output, expected);
        assert!(!output.contains("Dependencies with multiple licenses"));
    }

    #[test]
    fn test_full_text_missing_resource_fails() {
        let mut report = LicensingReport::new();
        report.add_licensed_artifact(ArtifactWithLicenses::new("w:1", "W").with_licenses(["Unknown"]));
        let formatter =
            TextReportFormatter::new(MapLocator::default(), TextReportOptions::license_list(None));

        let err = formatter.format(&report).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to read license text for 'Unknown'"));
    }

    #[test]
    fn test_lf_terminator_is_a_parameter() {
        let options = TextReportOptions {
            line_terminator: LineTerminator::Lf,
            ..TextReportOptions::notice(None, None)
        };
        let formatter = TextReportFormatter::new(MapLocator::default(), options);

        let output = formatter.format(&LicensingReport::new()).unwrap();

        assert_eq!(output, "Third-party licenses\n--------------------\n\n");
        assert_eq!(RULE.len(), 78);
    }
}
