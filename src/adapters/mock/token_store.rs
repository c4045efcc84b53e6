//! In-memory token store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{TokenStore, TokenStoreError};

/// In-memory token store.
///
/// Clones share the same slot, so a test can keep a handle and inspect
/// what the code under test persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.token.lock().unwrap() = Some(token.to_string());
        store
    }

    /// Configure whether `set` should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Current token, synchronously.
    pub fn current(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.current())
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(TokenStoreError::SaveFailed("Mock save failure".to_string()));
        }
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryTokenStore::new();
        assert_eq!(store.get().await.unwrap(), None);

        store.set("abc").await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some("abc".to_string()));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_previous_token() {
        let store = InMemoryTokenStore::with_token("old");
        store.set_save_should_fail(true);

        assert!(store.set("new").await.is_err());
        assert_eq!(store.current(), Some("old".to_string()));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryTokenStore::new();
        let cloned = store.clone();
        cloned.set("shared").await.unwrap();
        assert_eq!(store.current(), Some("shared".to_string()));

        store.clear().await.unwrap();
        assert_eq!(cloned.current(), None);
    }
}
