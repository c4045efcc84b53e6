//! File-backed token store.
//!
//! Stores preferences as a flat JSON object in `~/.eeum/preferences.json`,
//! with the access token under the `"accessToken"` key.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::{TokenStore, TokenStoreError, ACCESS_TOKEN_KEY};

/// The preferences directory name.
const PREFERENCES_DIR: &str = ".eeum";

/// The preferences file name.
const PREFERENCES_FILE: &str = "preferences.json";

/// File-based token store.
///
/// Other keys in the preferences file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the default location under the home directory.
    pub fn new() -> Result<Self, TokenStoreError> {
        let home = dirs::home_dir().ok_or_else(|| {
            TokenStoreError::Unavailable("Failed to determine home directory".to_string())
        })?;
        Ok(Self {
            path: home.join(PREFERENCES_DIR).join(PREFERENCES_FILE),
        })
    }

    /// Create a store backed by an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_preferences(&self) -> Result<Map<String, Value>, TokenStoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let file =
            File::open(&self.path).map_err(|e| TokenStoreError::LoadFailed(e.to_string()))?;
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(TokenStoreError::LoadFailed(
                "preferences file is not a JSON object".to_string(),
            )),
            Err(e) => Err(TokenStoreError::LoadFailed(e.to_string())),
        }
    }

    fn write_preferences(&self, preferences: &Map<String, Value>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| TokenStoreError::SaveFailed(e.to_string()))?;
            }
        }

        let file =
            File::create(&self.path).map_err(|e| TokenStoreError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, preferences)
            .map_err(|e| TokenStoreError::SaveFailed(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| TokenStoreError::SaveFailed(e.to_string()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        let preferences = self.read_preferences()?;
        Ok(preferences
            .get(ACCESS_TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        // Unreadable files are replaced rather than blocking login
        let mut preferences = self.read_preferences().unwrap_or_default();
        preferences.insert(ACCESS_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_preferences(&preferences)
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut preferences = self
            .read_preferences()
            .map_err(|e| TokenStoreError::ClearFailed(e.to_string()))?;
        preferences.remove(ACCESS_TOKEN_KEY);
        self.write_preferences(&preferences)
            .map_err(|e| TokenStoreError::ClearFailed(e.to_string()))
    }
}
