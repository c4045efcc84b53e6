//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileTokenStore`] - JSON preferences file holding the access token
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod file_token_store;
pub mod mock;
pub mod reqwest_http;

pub use file_token_store::FileTokenStore;
pub use mock::{InMemoryTokenStore, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
