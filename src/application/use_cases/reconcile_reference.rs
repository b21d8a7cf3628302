use crate::ports::outbound::ReportStore;
use crate::shared::error::LicensingError;
use crate::shared::Result;
use std::borrow::Cow;
use std::path::Path;

/// How generated and reference bytes are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEndingComparison {
    /// Byte-for-byte
    #[default]
    Exact,
    /// `\r\n` and `\r` are read as `\n` on both sides
    Normalized,
}

/// Result of a successful reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The reference already matched
    Confirmed,
    /// The reference differed (or was missing) and was replaced
    Overwritten,
}

/// ReferenceReconciler compares a freshly generated report with a checked-in
/// reference file
///
/// A difference fails the run unless overwrite mode is on, in which case the
/// reference is replaced with the generated bytes.
pub struct ReferenceReconciler<'a, S: ReportStore> {
    store: &'a S,
    overwrite: bool,
    comparison: LineEndingComparison,
}

impl<'a, S: ReportStore> ReferenceReconciler<'a, S> {
    pub fn new(store: &'a S, overwrite: bool, comparison: LineEndingComparison) -> Self {
        Self {
            store,
            overwrite,
            comparison,
        }
    }

    /// Reconciles `generated` (the bytes written to `generated_path`) with the
    /// file at `reference`
    ///
    /// # Errors
    /// Returns `LicensingError::ReferenceMismatch` naming both paths when the
    /// contents differ or the reference is missing and overwrite is off; any
    /// read or write failure is returned as is
    pub fn reconcile(
        &self,
        generated_path: &Path,
        generated: &[u8],
        reference: &Path,
    ) -> Result<ReconcileOutcome> {
        let existing = self.store.read_file(reference)?;

        if let Some(existing) = existing.as_deref() {
            if self.same_content(generated, existing) {
                return Ok(ReconcileOutcome::Confirmed);
            }
        }

        if !self.overwrite {
            return Err(LicensingError::ReferenceMismatch {
                generated: generated_path.to_path_buf(),
                existing: reference.to_path_buf(),
            }
            .into());
        }

        self.store.write_file(reference, generated)?;
        Ok(ReconcileOutcome::Overwritten)
    }

    fn same_content(&self, generated: &[u8], existing: &[u8]) -> bool {
        match self.comparison {
            LineEndingComparison::Exact => generated == existing,
            LineEndingComparison::Normalized => {
                normalize_line_endings(generated) == normalize_line_endings(existing)
            }
        }
    }
}

fn normalize_line_endings(bytes: &[u8]) -> Cow<'_, [u8]> {
    if !bytes.contains(&b'\r') {
        return Cow::Borrowed(bytes);
    }

    let mut normalized = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().peekable();
    while let Some(&byte) = iter.next() {
        if byte == b'\r' {
            iter.next_if_eq(&&b'\n');
            normalized.push(b'\n');
        } else {
            normalized.push(byte);
        }
    }
    Cow::Owned(normalized)
}
