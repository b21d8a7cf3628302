/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// filesystem documents and reports, report formatters and the console.
pub mod outbound;
