use crate::domain::Book;
use crate::ports::catalog_repository::{CatalogRepository as CatalogRepositoryTrait, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON file implementation of CatalogRepository
///
/// Stores the whole catalog as a single JSON array, indented with 4 spaces,
/// UTF-8 with non-ASCII characters left unescaped.
/// Writes go to a sibling temp file that is then renamed over the target,
/// so the previous version survives a crash mid-write.
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "catalog.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serialize books as a JSON array with 4-space indentation
pub fn to_catalog_json(books: &[Book]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut serializer)?;
    Ok(buf)
}

#[async_trait]
impl CatalogRepositoryTrait for CatalogFile {
    /// Read the catalog file
    ///
    /// A missing file is reported as `None`; unreadable or unparseable
    /// content is an error and the file is left as is.
    async fn load(&self) -> Result<Option<Vec<Book>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let books: Vec<Book> = serde_json::from_slice(&bytes)?;
        Ok(Some(books))
    }

    /// Replace the catalog file with the given books
    async fn save(&self, books: &[Book]) -> Result<()> {
        let json = to_catalog_json(books)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        let written = match tokio::fs::write(&temp_path, &json).await {
            Ok(()) => tokio::fs::rename(&temp_path, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        tracing::debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}
