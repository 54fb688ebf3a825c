//! Concrete repository implementations.

pub mod file;
