//! Catalog backend abstraction.
//!
//! The trait is kept to the single operation the worker needs, so tests and
//! alternative sources can stand in for the JSON file.

use crate::domain::{Result, Short};

/// Read-only source of shorts.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::storage::JsonCatalog): JSON file on the host
///   filesystem
///
/// # Examples
///
/// ```no_run
/// use reelbox::storage::{Catalog, JsonCatalog};
///
/// let catalog = JsonCatalog::new("/host/.local/share/zellij/reelbox/shorts.json");
/// let shorts = catalog.load_shorts()?;
/// # Ok::<(), reelbox::domain::ReelboxError>(())
/// ```
pub trait Catalog: Send {
    /// Returns every short in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load_shorts(&self) -> Result<Vec<Short>>;
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Catalog;
    use crate::domain::{Result, Short};

    /// In-memory catalog for worker tests.
    pub struct StaticCatalog(pub Vec<Short>);

    impl Catalog for StaticCatalog {
        fn load_shorts(&self) -> Result<Vec<Short>> {
            Ok(self.0.clone())
        }
    }
}
