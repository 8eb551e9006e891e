pub mod book_lookup;

pub use book_lookup::BookLookup;
