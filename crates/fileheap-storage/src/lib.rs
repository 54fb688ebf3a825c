//! # fileheap-storage
//!
//! Object storage backends for FileHeap payloads. The S3-compatible
//! backend talks to the real bucket; the in-memory backend serves tests
//! and credential-free local runs.

pub mod memory;
pub mod s3;

pub use memory::InMemoryObjectStore;
pub use s3::S3ObjectStore;
