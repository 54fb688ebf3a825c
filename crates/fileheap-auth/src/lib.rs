//! # fileheap-auth
//!
//! Client for the external token-validation service. FileHeap implements
//! no auth logic of its own; every request's token is resolved remotely.

pub mod client;

pub use client::RemoteTokenValidator;
