//! The media-store seam.
//!
//! The upload gateway only needs two things from object storage: write bytes
//! under a key, and tell it the public URL of that key. Implementations live
//! in `maya-storage`.

use async_trait::async_trait;
use bytes::Bytes;

/// Failure reported by a storage backend. The message is surfaced to the
/// admin client as-is.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Object storage for uploaded media.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store `body` under `key` with the given content type.
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError>;

    /// Publicly resolvable URL for an object previously stored under `key`.
    fn public_url(&self, key: &str) -> String;
}
