//! # fileheap-api
//!
//! HTTP API layer for FileHeap built on Axum: routes, handlers,
//! extractors, error mapping, and request logging.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
