pub mod yaml_backend;

use crate::{domain::Catalog, errors::StoreError};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends capable of storing a catalog.
pub trait CatalogStore {
    /// Loads the catalog, falling back to an empty one when nothing has been
    /// stored yet.
    fn load(&self) -> Result<Catalog>;
    /// Overwrites the stored catalog with `catalog`.
    fn save(&self, catalog: &Catalog) -> Result<()>;
}

pub use yaml_backend::{from_yaml, to_yaml, YamlStorage};
