use serde::{Deserialize, Serialize};
use std::fmt;

/// ISBN - カタログ内で書籍を識別する不透明な識別子
///
/// チェックディジットや桁数の検証は行わない。
/// 前後の空白のみ取り除き、比較は文字列の完全一致で行う。
/// デシリアライズ時も`Isbn::new`を通す。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// 空文字列（空白のみを含む）かどうか
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}
