//! JSON Snapshot Store Adapter
//!
//! Persists the saved user data as one JSON file, overwritten whole on
//! each save.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::session::UserData;
use crate::ports::{SnapshotError, SnapshotStore};

/// File-based snapshot store for user data
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a snapshot store writing to the given file path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn save(&self, user_data: &UserData) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(user_data)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| SnapshotError::Io(e.to_string()))?;
            }
        }

        fs::write(&self.path, json)
            .await
            .map_err(|e| SnapshotError::Io(e.to_string()))?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<UserData>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SnapshotError::Io(e.to_string()))?;

        let user_data = serde_json::from_str(&json)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))?;

        Ok(Some(user_data))
    }
}
