mod catalog_store;
mod errors;

pub use catalog_store::Catalog;
pub use errors::{CatalogError, Result};
