//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fileheap_core::types::id::{FileId, UserId};

/// Metadata for one uploaded object.
///
/// The `name` doubles as the key of the payload in the object store.
/// Records are immutable once created; no update or delete operation
/// exists. A record's existence does not guarantee the object is still
/// in the bucket — there is no transactional link between the two.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    /// Unique identifier, assigned by the metadata store on insert.
    pub id: FileId,
    /// Original filename; also the storage key.
    pub name: String,
    /// Caller-supplied classification string. Unconstrained.
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    /// The user who uploaded the file. Assigned at creation, never mutated.
    pub owner_id: UserId,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    /// The key under which the payload lives in the object store.
    pub fn storage_key(&self) -> &str {
        &self.name
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRecord {
    /// Original filename / storage key.
    pub name: String,
    /// Caller-supplied classification string.
    pub file_type: Option<String>,
    /// Owner resolved from the validated access token.
    pub owner_id: UserId,
}
