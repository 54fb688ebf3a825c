//! File service — upload, listing, and download-link flows.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{error, info};

use fileheap_core::error::AppError;
use fileheap_core::result::AppResult;
use fileheap_core::traits::object_store::ObjectStore;
use fileheap_core::types::id::{FileId, UserId};
use fileheap_database::repositories::file::FileStore;
use fileheap_entity::file::{CreateFileRecord, FileRecord};

/// Parameters for a single-request upload.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Original filename; becomes the storage key.
    pub file_name: String,
    /// Caller-supplied classification string.
    pub file_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Orchestrates the upload / list / link flows over the injected
/// metadata store and object store.
#[derive(Debug, Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
    objects: Arc<dyn ObjectStore>,
    presign_ttl: Duration,
}

impl FileService {
    /// Create a new file service.
    pub fn new(
        files: Arc<dyn FileStore>,
        objects: Arc<dyn ObjectStore>,
        presign_ttl: Duration,
    ) -> Self {
        Self {
            files,
            objects,
            presign_ttl,
        }
    }

    /// Store the payload, then persist the metadata record.
    ///
    /// A failed storage write short-circuits before any metadata is
    /// created. If the insert fails after a successful write, the stored
    /// object is removed again on a best-effort basis so the failed
    /// request leaves no orphan behind.
    pub async fn upload(&self, owner: UserId, params: UploadParams) -> AppResult<FileRecord> {
        if params.file_name.is_empty() {
            return Err(AppError::validation("File name must not be empty"));
        }

        let key = params.file_name.clone();
        self.objects.put(&key, params.data).await?;

        let record = CreateFileRecord {
            name: params.file_name,
            file_type: params.file_type,
            owner_id: owner,
        };

        match self.files.insert(record).await {
            Ok(stored) => {
                info!(
                    file_id = %stored.id,
                    owner_id = %owner,
                    name = %stored.name,
                    "File uploaded"
                );
                Ok(stored)
            }
            Err(e) => {
                if let Err(cleanup) = self.objects.delete(&key).await {
                    error!(
                        key = %key,
                        error = %cleanup,
                        "Failed to remove orphaned object after insert failure"
                    );
                }
                Err(e)
            }
        }
    }

    /// All records owned by any of the given users.
    pub async fn list_by_owners(&self, owners: &[UserId]) -> AppResult<Vec<FileRecord>> {
        if owners.is_empty() {
            return Ok(Vec::new());
        }
        self.files.list_by_owners(owners).await
    }

    /// A fresh presigned download URL for the record's storage key.
    ///
    /// Minting a link reads metadata only; repeated calls never mutate
    /// the record.
    pub async fn download_link(&self, id: FileId) -> AppResult<String> {
        let record = self
            .files
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;

        self.objects
            .presigned_get_url(record.storage_key(), self.presign_ttl)
            .await
    }
}
