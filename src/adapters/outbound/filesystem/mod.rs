/// Filesystem adapters for document, resource and report I/O
mod file_reader;
mod file_writer;
mod resource_locator;

pub use file_reader::FileSystemReader;
pub use file_writer::FileSystemStore;
pub use resource_locator::DirectoryResourceLocator;
