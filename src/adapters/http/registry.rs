//! In-process session registry.
//!
//! Holds every open session's state in memory, keyed by [`SessionId`].
//! The map lock is only held long enough to resolve a session entry;
//! each session then serializes its own actions behind a per-session
//! mutex. A slow side effect in one session (such as the snapshot file
//! write) never blocks reads or actions on any other session.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::application::handlers::{ActionApplied, ApplyActionHandler};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{Action, SessionState, UserData};

/// Registry of open sessions
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<SessionState>>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session and return its id.
    pub async fn open(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(SessionState::new())));
        id
    }

    /// Discard a session's state. Returns false if it was never open.
    pub async fn close(&self, id: SessionId) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Number of open sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Resolve a session entry, releasing the map lock before returning.
    async fn entry(&self, id: SessionId) -> Result<Arc<Mutex<SessionState>>, DomainError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(DomainError::SessionNotFound(id))
    }

    /// Read access to a session's state through a closure.
    pub async fn read<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&SessionState) -> T,
    ) -> Result<T, DomainError> {
        let entry = self.entry(id).await?;
        let state = entry.lock().await;
        Ok(f(&state))
    }

    /// A copy of the session's saved user data.
    pub async fn user_data(&self, id: SessionId) -> Result<UserData, DomainError> {
        self.read(id, |state| state.user_data.clone()).await
    }

    /// Apply one action to a session, holding only that session's lock.
    pub async fn apply(
        &self,
        id: SessionId,
        action: Action,
        handler: &ApplyActionHandler,
    ) -> Result<ActionApplied, DomainError> {
        let entry = self.entry(id).await?;
        let mut state = entry.lock().await;
        Ok(handler.handle(&mut state, action).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySnapshotStore;
    use crate::domain::catalog::Catalog;
    use crate::ports::{SnapshotError, SnapshotStore};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;
    use tokio::time::timeout;

    fn apply_handler() -> ApplyActionHandler {
        ApplyActionHandler::new(Catalog::builtin(), Arc::new(InMemorySnapshotStore::new()))
    }

    /// Snapshot store whose save blocks until released, to simulate a
    /// hung disk write.
    struct StalledSnapshotStore {
        entered: Notify,
        release: Notify,
    }

    impl StalledSnapshotStore {
        fn new() -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl SnapshotStore for StalledSnapshotStore {
        async fn save(&self, _user_data: &UserData) -> Result<(), SnapshotError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(())
        }

        async fn load(&self) -> Result<Option<UserData>, SnapshotError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_open_and_close() {
        let registry = SessionRegistry::new();

        let id = registry.open().await;
        assert_eq!(registry.len().await, 1);

        assert!(registry.close(id).await);
        assert_eq!(registry.len().await, 0);
        assert!(!registry.close(id).await);
    }

    #[tokio::test]
    async fn test_read_unknown_session_is_not_found() {
        let registry = SessionRegistry::new();

        let result = registry.read(SessionId::new(), |_| ()).await;

        assert!(matches!(result, Err(DomainError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_apply_mutates_only_the_target_session() {
        let registry = SessionRegistry::new();
        let handler = apply_handler();

        let id1 = registry.open().await;
        let id2 = registry.open().await;

        registry
            .apply(
                id1,
                Action::AddStep {
                    text: "step".to_string(),
                },
                &handler,
            )
            .await
            .unwrap();

        let steps1 = registry.read(id1, |s| s.steps.len()).await.unwrap();
        let steps2 = registry.read(id2, |s| s.steps.len()).await.unwrap();
        assert_eq!(steps1, 1);
        assert_eq!(steps2, 0);
    }

    #[tokio::test]
    async fn test_apply_to_closed_session_is_not_found() {
        let registry = SessionRegistry::new();
        let handler = apply_handler();

        let id = registry.open().await;
        registry.close(id).await;

        let result = registry.apply(id, Action::ResetAll, &handler).await;

        assert!(matches!(result, Err(DomainError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_stalled_snapshot_write_does_not_block_other_sessions() {
        let registry = SessionRegistry::new();
        let store = Arc::new(StalledSnapshotStore::new());
        let handler = Arc::new(ApplyActionHandler::new(Catalog::builtin(), store.clone()));

        let id1 = registry.open().await;
        let id2 = registry.open().await;

        let writer = {
            let registry = registry.clone();
            let handler = handler.clone();
            tokio::spawn(async move {
                registry
                    .apply(id1, Action::SaveLearningPath, &handler)
                    .await
                    .unwrap()
            })
        };

        // Wait until the snapshot write is in flight and parked.
        store.entered.notified().await;

        // Reads and actions on the other session must still go through.
        let read = timeout(
            Duration::from_millis(200),
            registry.read(id2, |s| s.show_tutorial),
        )
        .await
        .expect("read of an unrelated session stalled behind a snapshot write");
        assert!(read.unwrap());

        let applied = timeout(
            Duration::from_millis(200),
            registry.apply(
                id2,
                Action::AddStep {
                    text: "step".to_string(),
                },
                &handler,
            ),
        )
        .await
        .expect("action on an unrelated session stalled behind a snapshot write");
        assert!(applied.unwrap().outcome.is_changed());

        store.release.notify_one();
        let applied = writer.await.unwrap();
        assert!(applied.outcome.is_changed());
        assert!(applied.snapshot_error.is_none());
    }

    #[tokio::test]
    async fn test_same_session_actions_serialize_behind_its_lock() {
        let registry = SessionRegistry::new();
        let store = Arc::new(StalledSnapshotStore::new());
        let handler = Arc::new(ApplyActionHandler::new(Catalog::builtin(), store.clone()));

        let id = registry.open().await;

        let writer = {
            let registry = registry.clone();
            let handler = handler.clone();
            tokio::spawn(async move {
                registry
                    .apply(id, Action::SaveLearningPath, &handler)
                    .await
                    .unwrap()
            })
        };

        store.entered.notified().await;

        // The same session stays locked until its in-flight action ends.
        let stalled = timeout(
            Duration::from_millis(100),
            registry.read(id, |s| s.steps.len()),
        )
        .await;
        assert!(stalled.is_err());

        store.release.notify_one();
        writer.await.unwrap();
        assert_eq!(registry.read(id, |s| s.steps.len()).await.unwrap(), 0);
    }
}
