use crate::domain::{Book, Isbn};
use crate::ports::LookupError;
use serde::Deserialize;

/// Title used when the edition carries none
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Author used when the edition names none
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Open Library edition document (`/isbn/<isbn>.json`)
///
/// Only the fields the catalog needs are modeled; everything else,
/// including the edition's own ISBN fields, is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Edition {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<AuthorEntry>>,
}

/// One entry of the `authors` list
///
/// The service returns either plain strings or objects; objects usually
/// carry only a `key` reference, so `name` may be missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AuthorEntry {
    Plain(String),
    Named {
        #[serde(default)]
        name: Option<String>,
    },
    Other(serde_json::Value),
}

impl AuthorEntry {
    fn display_name(&self) -> Option<String> {
        match self {
            AuthorEntry::Plain(name) => Some(name.clone()),
            AuthorEntry::Named { name } => name.clone(),
            AuthorEntry::Other(value) => Some(value.to_string()),
        }
    }
}

impl Edition {
    /// Parse an edition from a response body
    pub fn from_slice(body: &[u8]) -> Result<Self, LookupError> {
        serde_json::from_slice(body).map_err(|e| LookupError::InvalidPayload(e.to_string()))
    }

    /// Title, or the sentinel when absent or blank
    pub fn title_or_default(&self) -> String {
        non_blank(self.title.clone()).unwrap_or_else(|| UNKNOWN_TITLE.to_string())
    }

    /// Name of the first listed author, or the sentinel
    pub fn author_or_default(&self) -> String {
        let first = self.authors.as_ref().and_then(|authors| authors.first());
        non_blank(first.and_then(AuthorEntry::display_name))
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
    }

    /// Build a catalog record keyed by the requested ISBN
    pub fn into_book(self, isbn: &Isbn) -> Result<Book, LookupError> {
        Book::new(self.title_or_default(), self.author_or_default(), isbn.clone())
            .map_err(|e| LookupError::InvalidPayload(e.to_string()))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
