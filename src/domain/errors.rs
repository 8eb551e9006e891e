use thiserror::Error;

/// 書籍レコード構築時の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    /// タイトルが空
    #[error("title must not be empty")]
    EmptyTitle,
    /// 著者が空
    #[error("author must not be empty")]
    EmptyAuthor,
    /// ISBNが空
    #[error("isbn must not be empty")]
    EmptyIsbn,
}
