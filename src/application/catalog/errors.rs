use crate::domain::BookValidationError;
use crate::ports::LookupError;
use thiserror::Error;

/// カタログ操作のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 書誌検索に失敗した（ネットワーク障害、該当なし、不正なレスポンス）
    #[error("Book lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// 書籍レコードが不正
    #[error("Invalid book: {0}")]
    InvalidBook(#[from] BookValidationError),

    /// カタログの保存に失敗した
    ///
    /// メモリ上のコレクションは呼び出し前の状態のまま。
    #[error("Failed to persist catalog")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// カタログ操作の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
