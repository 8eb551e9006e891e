use super::edition::Edition;
use crate::domain::{Book, Isbn};
use crate::ports::book_lookup::{BookLookup, LookupError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Open Library の公開API
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// 1回の問い合わせのタイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// BookLookupのOpen Library実装
///
/// `GET <base_url>/isbn/<isbn>.json` を1回だけ発行する。
/// リダイレクト（ISBN→エディション）はHTTPクライアントが追跡する。
pub struct OpenLibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// 接続先とタイムアウトを指定してクライアントを作成
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn edition_url(&self, isbn: &Isbn) -> String {
        format!("{}/isbn/{}.json", self.base_url, isbn)
    }
}

#[async_trait]
impl BookLookup for OpenLibraryClient {
    async fn resolve(&self, isbn: &Isbn) -> Result<Book, LookupError> {
        let url = self.edition_url(isbn);
        tracing::debug!("Looking up ISBN {} at {}", isbn, url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("No edition found for ISBN {}", isbn);
            return Err(LookupError::NotFound);
        }
        if status != StatusCode::OK {
            tracing::debug!("Lookup for ISBN {} returned {}", isbn, status);
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Edition::from_slice(&body)?.into_book(isbn)
    }
}
