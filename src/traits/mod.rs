//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, multipart PATCH)
//! - [`SessionStorage`] - Durable storage of the signed-in session

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, MultipartFile, Response};
pub use storage::{SessionStorage, StorageError};
