//! Session-scoped mutable state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ResourceRecord;

/// Inputs the user has explicitly saved, plus the saved learning path.
///
/// Replaced wholesale by a successful SaveInputs; cleared by ResetAll. This
/// is also the shape of the persisted JSON snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Selected interests (order as chosen in the UI).
    pub interests: Vec<String>,

    /// Main field; empty until saved.
    pub main_field: String,

    /// Sub-field within the main field.
    pub sub_field: String,

    /// Primary goal.
    pub goal: String,

    /// Saved copy of the step list, present only after SaveLearningPath.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<Vec<String>>,
}

impl UserData {
    /// True once field, sub-field, and goal have all been saved.
    pub fn is_complete(&self) -> bool {
        !self.main_field.is_empty() && !self.sub_field.is_empty() && !self.goal.is_empty()
    }
}

/// All state owned by a single session.
///
/// # Invariants
///
/// - `favorites` never holds two records with the same title
/// - `steps` is seeded from the goal checklist at most once (only while
///   empty) and is user-controlled afterwards
/// - `reviews` lists are append-only within the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Editable learning path steps, in display order.
    pub steps: Vec<String>,

    /// Favorited resources, in the order they were added.
    pub favorites: Vec<ResourceRecord>,

    /// Reviews keyed by resource title, each list in submission order.
    pub reviews: BTreeMap<String, Vec<String>>,

    /// Whether the onboarding tutorial is still shown.
    pub show_tutorial: bool,

    /// Explicitly saved user inputs.
    pub user_data: UserData,
}

impl SessionState {
    /// Fresh state for a newly opened session.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            favorites: Vec::new(),
            reviews: BTreeMap::new(),
            show_tutorial: true,
            user_data: UserData::default(),
        }
    }

    /// Clears steps, favorites, reviews, and user data.
    ///
    /// The tutorial flag survives a reset: the user has already seen it.
    pub fn reset_all(&mut self) {
        self.steps.clear();
        self.favorites.clear();
        self.reviews.clear();
        self.user_data = UserData::default();
    }

    /// Reviews submitted for a resource title, empty if none.
    pub fn reviews_for(&self, title: &str) -> &[String] {
        self.reviews.get(title).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a resource with this title has been favorited.
    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.iter().any(|f| f.title == title)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
