pub mod book_lookup;
pub mod catalog_repository;

pub use book_lookup::*;
pub use catalog_repository::CatalogRepository;
