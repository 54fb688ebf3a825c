//! File upload, listing, and download-link handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::HeaderMap;
use bytes::Bytes;

use fileheap_core::error::{AppError, ErrorKind};
use fileheap_core::types::id::{FileId, UserId};
use fileheap_entity::file::FileRecord;
use fileheap_service::file::UploadParams;

use crate::dto::request::{CreateFileQuery, ListFilesQuery};
use crate::error::ApiError;
use crate::extractors::auth::{AuthUser, access_token};
use crate::state::AppState;

/// POST /file — multipart upload.
///
/// The external contract reports an auth rejection here as 400 with
/// "Invalid access token", unlike the read endpoints which use 401.
pub async fn create_file(
    State(state): State<AppState>,
    Query(query): Query<CreateFileQuery>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<FileRecord>, ApiError> {
    let owner = match state.token_validator.validate(access_token(&headers)).await {
        Ok(user_id) => user_id,
        Err(e) if e.kind == ErrorKind::Authentication => {
            return Err(AppError::validation("Invalid access token").into());
        }
        Err(e) => return Err(e.into()),
    };

    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart read error: {e}")))?,
            );
        }
    }

    let file_name = file_name.ok_or_else(|| AppError::validation("file field is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file content is required"))?;

    let record = state
        .file_service
        .upload(
            owner,
            UploadParams {
                file_name,
                file_type: query.filetype,
                data,
            },
        )
        .await?;

    Ok(Json(record))
}

/// GET /file?user=a,b,c — records owned by any of the given users.
pub async fn list_files(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let raw = query
        .user
        .ok_or_else(|| AppError::validation("user query parameter is required"))?;

    let owners = parse_owner_filter(&raw)?;
    let files = state.file_service.list_by_owners(&owners).await?;

    Ok(Json(files))
}

/// GET /file/{file_id} — a fresh presigned download URL as a JSON string.
pub async fn download_link(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(file_id): Path<FileId>,
) -> Result<Json<String>, ApiError> {
    let url = state.file_service.download_link(file_id).await?;
    Ok(Json(url))
}

/// Splits a comma-separated owner filter into identifiers.
///
/// Empty entries are skipped, so an empty filter yields an empty set; any
/// malformed entry fails the whole request before the store is queried.
fn parse_owner_filter(raw: &str) -> Result<Vec<UserId>, AppError> {
    let mut owners = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let id = entry
            .parse::<UserId>()
            .map_err(|_| AppError::validation(format!("Invalid user id '{entry}'")))?;
        owners.push(id);
    }
    Ok(owners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_parse_owner_filter_single() {
        let id = Uuid::new_v4();
        let owners = parse_owner_filter(&id.to_string()).expect("parse");
        assert_eq!(owners, vec![UserId::from_uuid(id)]);
    }

    #[test]
    fn test_parse_owner_filter_multiple_with_spaces() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let owners = parse_owner_filter(&format!("{a}, {b}")).expect("parse");
        assert_eq!(owners.len(), 2);
    }

    #[test]
    fn test_parse_owner_filter_empty_is_empty() {
        assert!(parse_owner_filter("").expect("parse").is_empty());
        assert!(parse_owner_filter(",,").expect("parse").is_empty());
    }

    #[test]
    fn test_parse_owner_filter_rejects_malformed_entry() {
        let a = Uuid::new_v4();
        assert!(parse_owner_filter(&format!("{a},not-a-uuid")).is_err());
    }
}
