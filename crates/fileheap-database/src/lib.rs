//! # fileheap-database
//!
//! PostgreSQL connection management, migrations, and the metadata store
//! implementation for FileHeap.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::file::{FileRepository, FileStore};
