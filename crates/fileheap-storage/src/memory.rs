//! In-memory object store for tests and credential-free local runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use fileheap_core::result::AppResult;
use fileheap_core::traits::object_store::ObjectStore;

/// HashMap-backed [`ObjectStore`].
///
/// The store is `Clone` so tests can hold a handle for direct inspection
/// while the application owns another.
#[derive(Debug, Clone)]
pub struct InMemoryObjectStore {
    bucket: String,
    objects: Arc<Mutex<HashMap<String, Bytes>>>,
}

impl InMemoryObjectStore {
    /// Create an empty store labeled with a bucket name.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns a clone of the stored payload, if present.
    pub fn get_stored(&self, key: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// Returns `true` if an object exists under the key.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    /// Returns the number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Returns `true` if the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.objects.lock().unwrap().insert(key.to_string(), data);
        Ok(())
    }

    async fn presigned_get_url(&self, key: &str, ttl: Duration) -> AppResult<String> {
        Ok(format!(
            "memory://{}/{}?expires_in={}",
            self.bucket,
            key,
            ttl.as_secs()
        ))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_inspect() {
        let store = InMemoryObjectStore::new("files-heap");
        store
            .put("report.pdf", Bytes::from_static(b"%PDF-1.7"))
            .await
            .expect("put");

        assert!(store.contains("report.pdf"));
        assert_eq!(
            store.get_stored("report.pdf"),
            Some(Bytes::from_static(b"%PDF-1.7"))
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_key() {
        let store = InMemoryObjectStore::new("files-heap");
        store.put("a.txt", Bytes::from_static(b"one")).await.expect("put");
        store.put("a.txt", Bytes::from_static(b"two")).await.expect("put");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_stored("a.txt"), Some(Bytes::from_static(b"two")));
    }

    #[tokio::test]
    async fn test_delete_removes_object() {
        let store = InMemoryObjectStore::new("files-heap");
        store.put("a.txt", Bytes::from_static(b"one")).await.expect("put");
        store.delete("a.txt").await.expect("delete");

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_presigned_url_embeds_key_and_ttl() {
        let store = InMemoryObjectStore::new("files-heap");
        let url = store
            .presigned_get_url("report.pdf", Duration::from_secs(600))
            .await
            .expect("presign");

        assert_eq!(url, "memory://files-heap/report.pdf?expires_in=600");
    }

    #[tokio::test]
    async fn test_presign_does_not_require_existence() {
        let store = InMemoryObjectStore::new("files-heap");
        let url = store
            .presigned_get_url("ghost.bin", Duration::from_secs(600))
            .await
            .expect("presign");

        assert!(url.contains("ghost.bin"));
        assert!(store.is_empty());
    }
}
