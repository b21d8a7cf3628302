use crate::shared::Result;

/// ResourceLocator port for resolving named text resources
///
/// A resource is either a license name whose full text is needed, or a
/// boilerplate block (prefix/suffix) referenced by name or path.
pub trait ResourceLocator {
    /// Reads the text of the named resource
    ///
    /// # Errors
    /// Returns an error if the resource cannot be found or read
    fn read_resource(&self, name: &str) -> Result<String>;
}

impl<T: ResourceLocator + ?Sized> ResourceLocator for &T {
    fn read_resource(&self, name: &str) -> Result<String> {
        (**self).read_resource(name)
    }
}
