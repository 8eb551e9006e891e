pub mod book;
pub mod errors;
pub mod value_objects;

pub use book::*;
pub use errors::*;
pub use value_objects::*;
