#![allow(dead_code)]

use async_trait::async_trait;
use book_catalog::adapters::json_file::JsonCatalogFile;
use book_catalog::adapters::mock::BookLookup as MockBookLookup;
use book_catalog::application::catalog::Catalog;
use book_catalog::domain::Book;
use book_catalog::ports::catalog_repository::{CatalogRepository, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// テスト用の書籍を作成
pub fn book(title: &str, author: &str, isbn: &str) -> Book {
    Book::new(title, author, isbn).expect("valid test book")
}

/// JSONファイルに結びついたカタログを開く
pub async fn open_file_catalog(path: &Path, lookup: Arc<MockBookLookup>) -> Catalog {
    Catalog::open(Arc::new(JsonCatalogFile::new(path)), lookup).await
}

/// インメモリCatalogRepository実装
///
/// 保存の失敗を再現できる。
pub struct InMemoryCatalogRepository {
    stored: Mutex<Option<Vec<Book>>>,
    fail_saves: AtomicBool,
    save_count: AtomicUsize,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(None),
            fail_saves: AtomicBool::new(false),
            save_count: AtomicUsize::new(0),
        }
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(books);
        repo
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Option<Vec<Book>> {
        self.stored.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn load(&self) -> Result<Option<Vec<Book>>> {
        Ok(self.stored())
    }

    async fn save(&self, books: &[Book]) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "disk is read-only",
            )
            .into());
        }
        *self.stored.lock().unwrap() = Some(books.to_vec());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// 読み込みが常に失敗するCatalogRepository実装
pub struct UnreadableCatalogRepository;

#[async_trait]
impl CatalogRepository for UnreadableCatalogRepository {
    async fn load(&self) -> Result<Option<Vec<Book>>> {
        Err(std::io::Error::other("device not ready").into())
    }

    async fn save(&self, _books: &[Book]) -> Result<()> {
        Ok(())
    }
}
