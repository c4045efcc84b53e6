//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable, recorded responses
//! - [`InMemoryTokenStore`] - In-memory access-token storage

pub mod http;
pub mod token_store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use token_store::InMemoryTokenStore;
