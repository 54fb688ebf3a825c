//! Object storage trait for pluggable payload backends.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for object storage backends holding raw file payloads.
///
/// Implementations exist for S3-compatible services and an in-memory
/// store used by tests and credential-free local runs. The trait is
/// defined here in `fileheap-core` and implemented in `fileheap-storage`.
#[async_trait]
pub trait ObjectStore: Send + Sync + fmt::Debug + 'static {
    /// Return the backend type name (e.g., "s3", "memory").
    fn provider_type(&self) -> &str;

    /// Write the payload under the given key in the configured bucket.
    async fn put(&self, key: &str, data: Bytes) -> AppResult<()>;

    /// Produce a time-limited signed retrieval URL for a key.
    ///
    /// The key is not checked for existence; signing a key that was never
    /// written yields a URL that fails at retrieval time.
    async fn presigned_get_url(&self, key: &str, ttl: Duration) -> AppResult<String>;

    /// Delete the object under the given key.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
