use license_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// One call received by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported {
    Info(String),
    /// `(current, total, artifact id)`
    Progress(usize, usize, Option<String>),
    Warning(String),
    Completion(String),
}

/// Mock ProgressReporter recording every call in order
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<Reported>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Reported> {
        self.events.lock().unwrap().clone()
    }

    /// Artifact ids in the order classification reported them.
    pub fn classified_artifacts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Reported::Progress(_, _, Some(artifact_id)) => Some(artifact_id),
                _ => None,
            })
            .collect()
    }

    /// Warnings raised for missing or disliked artifacts.
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Reported::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn has_info_containing(&self, needle: &str) -> bool {
        self.events()
            .iter()
            .any(|event| matches!(event, Reported::Info(message) if message.contains(needle)))
    }

    fn push(&self, event: Reported) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(Reported::Info(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(Reported::Progress(current, total, message.map(str::to_string)));
    }

    fn report_error(&self, message: &str) {
        self.push(Reported::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(Reported::Completion(message.to_string()));
    }
}
