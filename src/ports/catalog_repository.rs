use crate::domain::Book;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログ永続化ポート
///
/// 書籍コレクション全体を1つの単位として読み書きする。
/// 部分更新は行わず、保存時は常にコレクション全体を置き換える。
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 保存済みの書籍を読み込む
    ///
    /// 保存先が存在しない場合は`Ok(None)`を返す。
    /// 内容が解釈できない場合や読み込みに失敗した場合はエラーを返す。
    /// いずれの場合も保存先の内容は変更しない。
    async fn load(&self) -> Result<Option<Vec<Book>>>;

    /// 書籍コレクション全体を保存する
    ///
    /// 挿入順序を保持したまま、既存の内容を置き換える。
    async fn save(&self, books: &[Book]) -> Result<()>;
}
