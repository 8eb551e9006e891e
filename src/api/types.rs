use serde::{Deserialize, Serialize};

use crate::domain::Book;

/// 書籍追加リクエスト（POST /books）
#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookRequest {
    pub isbn: String,
}

/// 書籍レスポンス（GET /books と POST /books）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
            isbn: book.isbn().value().to_string(),
        }
    }
}

/// メッセージのみのレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: detail.into(),
        }
    }
}
