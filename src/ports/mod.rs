/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist; the CLI drives the use case directly.
pub mod outbound;
