//! File upload, listing, and download-link flows.

pub mod service;

pub use service::{FileService, UploadParams};
