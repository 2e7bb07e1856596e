//! Port for the durable user data snapshot.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::UserData;

/// Errors from snapshot persistence.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    #[error("Snapshot serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Snapshot I/O failed: {0}")]
    Io(String),
}

/// Persists the saved user data as a single snapshot.
///
/// The write is best-effort whole-object replacement; there is no schema
/// versioning and no history.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Overwrites the snapshot with the given user data.
    async fn save(&self, user_data: &UserData) -> Result<(), SnapshotError>;

    /// Loads the snapshot, `None` if it was never written.
    async fn load(&self) -> Result<Option<UserData>, SnapshotError>;
}
