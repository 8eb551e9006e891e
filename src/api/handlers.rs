use crate::application::catalog::Catalog;
use crate::domain::Isbn;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{AddBookRequest, BookResponse, MessageResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// カタログはプロセス全体のシングルトンではなく、起動時に構築して注入する。
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET / - ウェルカムメッセージ
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "Welcome to the book catalog API. Books are served under /books.",
    ))
}

/// GET /books - 全書籍を登録順で取得
pub async fn list_books(State(state): State<Arc<AppState>>) -> Json<Vec<BookResponse>> {
    let books = state.catalog.list().await;
    Json(books.into_iter().map(BookResponse::from).collect())
}

// ============================================================================
// Command handlers (POST / DELETE)
// ============================================================================

/// POST /books - ISBNで書誌を検索して書籍を追加
///
/// 書誌検索に失敗した場合は404を返し、カタログは変更しない。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let isbn = Isbn::new(req.isbn);
    if isbn.is_blank() {
        return Err(ApiError::InvalidIsbn);
    }

    let book = state.catalog.add_by_isbn(&isbn).await?;
    tracing::info!("Added book via API: {}", book);

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// DELETE /books/:isbn - ISBNが一致する書籍をすべて削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let isbn = Isbn::new(isbn);

    if state.catalog.remove(&isbn).await? {
        Ok(Json(MessageResponse::new("Book removed")))
    } else {
        Err(ApiError::BookNotFound)
    }
}
