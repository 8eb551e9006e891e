pub mod catalog_file;

pub use catalog_file::CatalogFile as JsonCatalogFile;
