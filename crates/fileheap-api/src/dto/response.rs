//! Response DTOs.
//!
//! File records serialize directly from the entity model; only the
//! auxiliary endpoints need dedicated response shapes.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
