//! # fileheap-service
//!
//! Business logic for FileHeap. Orchestrates the metadata store and the
//! object store per request; holds no cross-request state.

pub mod file;

pub use file::service::FileService;
