use crate::application::catalog::CatalogError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// カタログ操作のエラーと入力エラーを、HTTPレスポンスへマッピングする。
#[derive(Debug)]
pub enum ApiError {
    /// カタログ操作の失敗
    Catalog(CatalogError),
    /// 指定されたISBNの書籍がカタログにない
    BookNotFound,
    /// ISBNが空
    InvalidIsbn,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, detail) = match self {
            // 400 Bad Request - 入力値の不備
            ApiError::InvalidIsbn => (
                StatusCode::BAD_REQUEST,
                "INVALID_ISBN",
                "ISBN must not be empty".to_string(),
            ),
            ApiError::Catalog(CatalogError::InvalidBook(e)) => {
                (StatusCode::BAD_REQUEST, "INVALID_BOOK", e.to_string())
            }

            // 404 Not Found - 該当する書籍がない、または書誌検索に失敗
            ApiError::BookNotFound => (
                StatusCode::NOT_FOUND,
                "BOOK_NOT_FOUND",
                "No book with the given ISBN was found".to_string(),
            ),
            ApiError::Catalog(CatalogError::Lookup(e)) => (
                StatusCode::NOT_FOUND,
                "BOOK_NOT_FOUND",
                format!(
                    "No book with the given ISBN was found or the lookup service failed: {}",
                    e
                ),
            ),

            // 500 Internal Server Error - 保存の失敗
            // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Catalog(CatalogError::Persistence(e)) => {
                tracing::error!("Persistence error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    "Failed to save the catalog".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, detail));
        (status, body).into_response()
    }
}
