//! File metadata store trait and its PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fileheap_core::error::{AppError, ErrorKind};
use fileheap_core::result::AppResult;
use fileheap_core::types::id::{FileId, UserId};
use fileheap_entity::file::{CreateFileRecord, FileRecord};

/// Persistence contract for file metadata records.
///
/// Implemented by [`FileRepository`] for PostgreSQL; tests substitute an
/// in-memory implementation. Records are immutable: the contract has no
/// update or delete operation.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new record, returning it with the identifier populated.
    async fn insert(&self, record: CreateFileRecord) -> AppResult<FileRecord>;

    /// All records whose owner is in the given set, in store-native order.
    ///
    /// An empty owner set yields an empty sequence without a query.
    async fn list_by_owners(&self, owners: &[UserId]) -> AppResult<Vec<FileRecord>>;

    /// Look up a single record by identifier.
    async fn get_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>>;
}

/// Repository for file metadata rows.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository on the shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn insert(&self, record: CreateFileRecord) -> AppResult<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (name, file_type, owner_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&record.name)
        .bind(&record.file_type)
        .bind(record.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert file record", e)
        })
    }

    async fn list_by_owners(&self, owners: &[UserId]) -> AppResult<Vec<FileRecord>> {
        if owners.is_empty() {
            return Ok(Vec::new());
        }

        let owner_ids: Vec<Uuid> = owners.iter().map(|o| o.into_uuid()).collect();
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE owner_id = ANY($1)")
            .bind(&owner_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn get_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }
}
