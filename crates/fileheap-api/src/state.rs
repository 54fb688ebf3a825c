//! Application state shared across all handlers.

use std::sync::Arc;

use fileheap_core::config::AppConfig;
use fileheap_core::traits::token_validator::TokenValidator;
use fileheap_service::FileService;

/// Application state containing all shared dependencies.
///
/// Every collaborator is constructed at startup and injected here; no
/// module-level singletons exist. All fields are `Arc`-wrapped for cheap
/// cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// External token-validation client.
    pub token_validator: Arc<dyn TokenValidator>,
    /// Upload / list / link orchestration.
    pub file_service: Arc<FileService>,
}
