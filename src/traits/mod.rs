//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP operations used by the OAuth and Drive clients

pub mod http;

pub use http::{bearer, Headers, HttpClient, HttpError, MultipartPart, Response};
