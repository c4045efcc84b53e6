//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, PATCH, DELETE)
//! - [`TokenStore`] - Access-token persistence

pub mod http;
pub mod token_store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use token_store::{TokenStore, TokenStoreError, ACCESS_TOKEN_KEY};
