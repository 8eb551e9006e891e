use crate::domain::{Book, Isbn};
use async_trait::async_trait;
use thiserror::Error;

/// 書誌検索の失敗理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// 該当する書籍がない（HTTP 404）
    #[error("no book found for this ISBN")]
    NotFound,

    /// 検索サービスが404以外の成功でないステータスを返した
    #[error("lookup service returned HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// 通信レベルの失敗（タイムアウト、接続失敗、名前解決失敗など）
    #[error("lookup service unreachable: {0}")]
    Transport(String),

    /// レスポンス本文が想定した形式でない
    #[error("unexpected lookup response: {0}")]
    InvalidPayload(String),
}

/// 書誌検索ポート
///
/// ISBNから書籍レコードを解決する外部サービスを抽象化する。
/// 呼び出しごとに1回だけ問い合わせ、再試行もキャッシュも行わない。
#[async_trait]
pub trait BookLookup: Send + Sync {
    /// ISBNから書籍レコードを解決する
    ///
    /// 返されるレコードのISBNは常に引数のISBNとなる。
    async fn resolve(&self, isbn: &Isbn) -> Result<Book, LookupError>;
}
