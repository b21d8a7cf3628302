/// Type alias for Result with anyhow::Error as the error type.
///
/// Typed failures are raised as `LicensingError` and travel inside the
/// `anyhow::Error`, so callers can still downcast them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
