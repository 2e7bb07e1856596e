//! ApplyActionHandler - applies one transition and handles its side effects.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::catalog::Catalog;
use crate::domain::session::{Action, Outcome, SessionState};
use crate::ports::{SnapshotError, SnapshotStore};

/// Result of a processed action.
///
/// `SaveLearningPath` persists the snapshot best-effort: a failed write is
/// reported here while the in-memory transition stays applied, so the state
/// is never left half-mutated.
#[derive(Debug)]
pub struct ActionApplied {
    pub outcome: Outcome,
    pub snapshot_error: Option<SnapshotError>,
}

/// Handler applying user actions to session state.
pub struct ApplyActionHandler {
    catalog: &'static Catalog,
    snapshot_store: Arc<dyn SnapshotStore>,
}

impl ApplyActionHandler {
    pub fn new(catalog: &'static Catalog, snapshot_store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            catalog,
            snapshot_store,
        }
    }

    pub async fn handle(&self, state: &mut SessionState, action: Action) -> ActionApplied {
        let wants_snapshot = matches!(action, Action::SaveLearningPath);

        let outcome = state.apply(action, self.catalog);
        debug!(?outcome, "action applied");

        let snapshot_error = if wants_snapshot && outcome.is_changed() {
            match self.snapshot_store.save(&state.user_data).await {
                Ok(()) => None,
                Err(e) => {
                    warn!(error = %e, "user data snapshot write failed");
                    Some(e)
                }
            }
        } else {
            None
        };

        ActionApplied {
            outcome,
            snapshot_error,
        }
    }
}
