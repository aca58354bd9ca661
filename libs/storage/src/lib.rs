//! File store abstraction for uploaded attachments.
//!
//! Handlers that accept binary uploads store the blob here first and record
//! the returned path on the document. The same directory is exposed over
//! HTTP as `/uploads/*` by the API process, so the stored path doubles as
//! the public URL path.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

pub type FileStoreResult<T> = Result<T, FileStoreError>;

/// Blob storage for uploaded attachments.
///
/// Implementations persist a named blob and return a stable relative path
/// under which it can later be served.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store a blob under a name derived from `original_name`.
    ///
    /// Returns the relative path to record on the owning document,
    /// e.g. `uploads/1724800000000-cover.png`.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> FileStoreResult<String>;
}

/// File store writing to a local directory.
///
/// Stored names are prefixed with the upload timestamp in milliseconds so
/// repeated uploads of the same file name never collide.
pub struct DiskFileStore {
    root: PathBuf,
    public_prefix: String,
}

impl DiskFileStore {
    /// Create a store rooted at `root`; files are addressed publicly as
    /// `<public_prefix>/<stored name>`.
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// The directory uploads are written to, for static serving.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn stored_name(original_name: &str) -> FileStoreResult<String> {
        // Keep only the final path component; uploads must not escape root.
        let base = original_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();

        if base.is_empty() || base == "." || base == ".." {
            return Err(FileStoreError::InvalidName(original_name.to_string()));
        }

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        Ok(format!("{}-{}", millis, base))
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn save(&self, original_name: &str, bytes: &[u8]) -> FileStoreResult<String> {
        let name = Self::stored_name(original_name)?;

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&name), bytes).await?;

        tracing::info!(stored = %name, "Attachment stored");
        Ok(format!("{}/{}", self.public_prefix, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("file-store-test-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_save_returns_public_path() {
        let root = temp_root();
        let store = DiskFileStore::new(&root, "uploads");

        let path = store.save("cover.png", b"png bytes").await.unwrap();

        assert!(path.starts_with("uploads/"));
        assert!(path.ends_with("-cover.png"));

        let stored = root.join(path.strip_prefix("uploads/").unwrap());
        let bytes = tokio::fs::read(stored).await.unwrap();
        assert_eq!(bytes, b"png bytes");

        tokio::fs::remove_dir_all(root).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_strips_directory_components() {
        let root = temp_root();
        let store = DiskFileStore::new(&root, "uploads");

        let path = store.save("../../etc/passwd", b"nope").await.unwrap();

        assert!(path.ends_with("-passwd"));
        assert!(!path.contains(".."));

        tokio::fs::remove_dir_all(root).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_rejects_empty_name() {
        let store = DiskFileStore::new(temp_root(), "uploads");
        let result = store.save("", b"data").await;
        assert!(matches!(result, Err(FileStoreError::InvalidName(_))));
    }
}
