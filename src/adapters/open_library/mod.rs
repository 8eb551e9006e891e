pub mod client;
pub mod edition;

pub use client::OpenLibraryClient;
pub use edition::{UNKNOWN_AUTHOR, UNKNOWN_TITLE};
