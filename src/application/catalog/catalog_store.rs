use crate::domain::{Book, Isbn};
use crate::ports::{BookLookup, CatalogRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::errors::{CatalogError, Result};

/// 書籍カタログ
///
/// 書籍レコードの順序付きコレクションと、その永続化先を保持する。
/// 挿入順序は常に保持される。
///
/// # 一貫性保証
///
/// 変更操作（add, remove）は候補となるコレクションを先に保存し、
/// 保存が成功した場合にのみメモリ上のコレクションを置き換える。
/// そのため操作が成功して戻った時点で、メモリ上の内容と保存先の内容は一致し、
/// 保存に失敗した場合はメモリ上の内容は呼び出し前のまま残る。
///
/// # 並行性
///
/// 変更操作は書き込みロックを保存完了まで保持し、同一インスタンスへの
/// 変更とファイル書き込みを直列化する。
/// 参照操作（find, list）は読み取りロックでスナップショットを返す。
/// 書誌検索のネットワーク呼び出し中はロックを保持しない。
pub struct Catalog {
    books: RwLock<Vec<Book>>,
    repository: Arc<dyn CatalogRepository>,
    lookup: Arc<dyn BookLookup>,
}

impl Catalog {
    /// 永続化先に結びついたカタログを作成し、既存の内容を読み込む
    pub async fn open(
        repository: Arc<dyn CatalogRepository>,
        lookup: Arc<dyn BookLookup>,
    ) -> Self {
        let catalog = Self {
            books: RwLock::new(Vec::new()),
            repository,
            lookup,
        };
        catalog.load().await;
        catalog
    }

    /// 永続化先から書籍を読み込む
    ///
    /// 保存先が存在しない、内容が解釈できない、読み込みに失敗した場合は
    /// いずれも空のカタログとして扱い、エラーは返さない。
    /// 解釈できなかった保存先は次回の保存まで変更しない。
    pub async fn load(&self) {
        let loaded = match self.repository.load().await {
            Ok(Some(books)) => {
                tracing::info!("Loaded {} books", books.len());
                books
            }
            Ok(None) => {
                tracing::info!("No catalog found, starting with an empty catalog");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Could not load catalog, starting with an empty catalog: {}", e);
                Vec::new()
            }
        };

        *self.books.write().await = loaded;
    }

    /// 現在のコレクション全体を保存する
    pub async fn save(&self) -> Result<()> {
        let books = self.books.write().await;
        self.persist(&books).await
    }

    /// 書籍を末尾に追加して保存する
    ///
    /// # 戻り値
    /// 追加された書籍
    ///
    /// # エラー
    /// - Persistence: 保存に失敗（コレクションは変更されない）
    pub async fn add(&self, book: Book) -> Result<Book> {
        let mut books = self.books.write().await;

        let mut candidate = books.clone();
        candidate.push(book.clone());
        self.persist(&candidate).await?;

        *books = candidate;
        Ok(book)
    }

    /// ISBNで書誌を検索し、見つかった書籍を追加する
    ///
    /// 検索はロックを取得する前に行う。
    ///
    /// # エラー
    /// - Lookup: 検索に失敗（コレクションは変更されず、保存も行わない）
    /// - Persistence: 保存に失敗
    pub async fn add_by_isbn(&self, isbn: &Isbn) -> Result<Book> {
        let book = self.lookup.resolve(isbn).await.map_err(|e| {
            tracing::warn!("Lookup for ISBN {} failed: {}", isbn, e);
            CatalogError::Lookup(e)
        })?;

        self.add(book).await
    }

    /// 指定したISBNを持つすべての書籍を削除する
    ///
    /// # 戻り値
    /// 1件以上削除した場合は`true`。該当がなければ`false`を返し、保存も行わない。
    pub async fn remove(&self, isbn: &Isbn) -> Result<bool> {
        let mut books = self.books.write().await;

        let candidate: Vec<Book> = books
            .iter()
            .filter(|book| book.isbn() != isbn)
            .cloned()
            .collect();

        if candidate.len() == books.len() {
            return Ok(false);
        }

        self.persist(&candidate).await?;
        *books = candidate;
        Ok(true)
    }

    /// ISBNが一致する最初の書籍を返す
    pub async fn find(&self, isbn: &Isbn) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.isbn() == isbn)
            .cloned()
    }

    /// 全書籍を挿入順で返す
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    async fn persist(&self, books: &[Book]) -> Result<()> {
        self.repository.save(books).await.map_err(|e| {
            tracing::error!("Failed to save catalog: {}", e);
            CatalogError::Persistence(e)
        })?;
        tracing::info!("Saved {} books", books.len());
        Ok(())
    }
}
