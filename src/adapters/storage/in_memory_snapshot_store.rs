//! In-Memory Snapshot Store Adapter
//!
//! Holds the user data snapshot in memory. Useful for testing and
//! development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::UserData;
use crate::ports::{SnapshotError, SnapshotStore};

/// In-memory snapshot store for user data
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    snapshot: Arc<RwLock<Option<UserData>>>,
}

impl InMemorySnapshotStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the stored snapshot (useful for tests)
    pub async fn clear(&self) {
        *self.snapshot.write().await = None;
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, user_data: &UserData) -> Result<(), SnapshotError> {
        *self.snapshot.write().await = Some(user_data.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<UserData>, SnapshotError> {
        Ok(self.snapshot.read().await.clone())
    }
}
