//! Request query parameters.

use serde::Deserialize;

/// Query parameters for `POST /file`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileQuery {
    /// Optional classification string stored alongside the record.
    pub filetype: Option<String>,
}

/// Query parameters for `GET /file`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListFilesQuery {
    /// Comma-separated list of owner identifiers.
    pub user: Option<String>,
}
