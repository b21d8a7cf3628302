/// ProgressReporter port for user-facing progress output
///
/// The audit has no global logger; every message meant for the user goes
/// through this port (stderr in the shipped adapter).
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports classification progress
    ///
    /// # Arguments
    /// * `current` - Number of artifacts classified so far
    /// * `total` - Total number of artifacts to classify
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error, e.g. a missing or disliked artifact
    fn report_error(&self, message: &str);

    /// Reports completion of a step
    fn report_completion(&self, message: &str);
}
