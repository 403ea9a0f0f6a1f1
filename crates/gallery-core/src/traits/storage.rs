//! Storage provider trait for pluggable blob storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Path within the storage provider.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// Trait for blob storage backends addressed by relative path strings.
///
/// Two instances back the gallery: one over the original media tree and one
/// over the thumbnail artifact tree. The artifact tree acts as a permanent
/// cache keyed by canonical path, so `write` must be a whole-file replace
/// that never exposes a partially written object to concurrent readers.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a file into memory as a complete byte buffer.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Atomically write bytes to a file at the given path, creating any
    /// missing parent directories.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Delete a file at the given path. Deleting a missing file is not an
    /// error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Get metadata about a stored object.
    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta>;
}
