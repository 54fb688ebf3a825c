//! Integration tests driven through the HTTP router.

mod helpers;

mod auth_rejection;
mod file_flow;
