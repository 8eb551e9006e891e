use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BookValidationError, Isbn};

/// 書籍レコード
///
/// 不変条件：
/// - タイトル・著者・ISBNはいずれも空でない
/// - 構築後は変更不可（フィールドは非公開、読み取り専用アクセサのみ）
///
/// 同じISBNを持つレコードの重複は許容する。一意性の確認は呼び出し側の責務。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    title: String,
    author: String,
    isbn: Isbn,
}

/// 永続化形式のままの書籍レコード
///
/// デシリアライズ時に `Book::new` の検証を通すための中間表現。
#[derive(Deserialize)]
struct BookRecord {
    title: String,
    author: String,
    isbn: Isbn,
}

impl TryFrom<BookRecord> for Book {
    type Error = BookValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Book::new(record.title, record.author, record.isbn)
    }
}

impl Book {
    /// 新しい書籍レコードを作成する
    ///
    /// # エラー
    /// いずれかのフィールドが空（空白のみを含む）場合に`BookValidationError`を返す
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<Isbn>,
    ) -> Result<Self, BookValidationError> {
        let title = title.into().trim().to_string();
        let author = author.into().trim().to_string();
        let isbn = isbn.into();

        if title.is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if isbn.is_blank() {
            return Err(BookValidationError::EmptyIsbn);
        }

        Ok(Self {
            title,
            author,
            isbn,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}
