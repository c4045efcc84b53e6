//! Access-token storage abstraction.
//!
//! The backend hands out a single bearer token at login. It is written once
//! and read on every authorized request, so the store is injected into the
//! [`crate::api::ApiClient`] rather than read from a global.

use async_trait::async_trait;
use thiserror::Error;

/// Preference key the access token is stored under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Token storage errors.
#[derive(Debug, Clone, Error)]
pub enum TokenStoreError {
    /// Failed to read the backing storage
    #[error("Failed to load access token: {0}")]
    LoadFailed(String),
    /// Failed to write the backing storage
    #[error("Failed to save access token: {0}")]
    SaveFailed(String),
    /// Failed to remove the stored token
    #[error("Failed to clear access token: {0}")]
    ClearFailed(String),
    /// Storage location could not be determined
    #[error("Token storage unavailable: {0}")]
    Unavailable(String),
}

/// Trait for access-token persistence.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the stored token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` if a token is stored
    /// - `Ok(None)` if nothing has been stored yet
    async fn get(&self) -> Result<Option<String>, TokenStoreError>;

    /// Replace the stored token.
    async fn set(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Forget the stored token.
    async fn clear(&self) -> Result<(), TokenStoreError>;
}
