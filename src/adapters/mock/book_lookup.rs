use crate::domain::{Book, Isbn};
use crate::ports::book_lookup::{BookLookup as BookLookupTrait, LookupError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock implementation of BookLookup
///
/// Resolves ISBNs from an in-memory table instead of the network.
/// Unknown ISBNs fail the way the real service does for a 404.
pub struct BookLookup {
    responses: Mutex<HashMap<Isbn, Result<Book, LookupError>>>,
    calls: Mutex<Vec<Isbn>>,
}

impl BookLookup {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register a book to be returned for its ISBN
    pub fn add_book(&self, book: Book) {
        self.responses
            .lock()
            .unwrap()
            .insert(book.isbn().clone(), Ok(book));
    }

    /// Register a failure for the given ISBN
    pub fn fail_with(&self, isbn: impl Into<Isbn>, error: LookupError) {
        self.responses.lock().unwrap().insert(isbn.into(), Err(error));
    }

    /// ISBNs resolved so far, in call order
    pub fn calls(&self) -> Vec<Isbn> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for BookLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookLookupTrait for BookLookup {
    async fn resolve(&self, isbn: &Isbn) -> Result<Book, LookupError> {
        self.calls.lock().unwrap().push(isbn.clone());
        self.responses
            .lock()
            .unwrap()
            .get(isbn)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}
