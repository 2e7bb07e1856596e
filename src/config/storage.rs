//! Storage configuration (user data snapshot)

use serde::Deserialize;

use super::error::ValidationError;

/// Storage configuration for the persisted user data snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Relative path of the JSON snapshot file
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_path.is_empty() {
            return Err(ValidationError::EmptySnapshotPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    "user_data.json".to_string()
}
