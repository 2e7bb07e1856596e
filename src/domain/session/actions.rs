//! Transition rules: one user action in, next state out.
//!
//! Every rule is deterministic in (state, action, catalog). Invalid input is
//! a silent no-op reported as [`Outcome::Ignored`], never an error; no rule
//! leaves the state partially mutated.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Catalog, ResourceRecord};

use super::state::{SessionState, UserData};

/// One user action against a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Choose a main field in the sidebar.
    SelectField { field: String },

    /// Save the sidebar inputs wholesale.
    SaveInputs {
        interests: Vec<String>,
        main_field: String,
        sub_field: String,
        goal: String,
    },

    /// Seed the step list from the goal's predefined checklist.
    InitSteps { goal: String },

    /// Append a custom step.
    AddStep { text: String },

    /// Remove the most recent step.
    RemoveLastStep,

    /// Positionally replace the existing steps.
    EditSteps { steps: Vec<String> },

    /// Add a resource to favorites (duplicate titles are ignored).
    ToggleFavorite { resource: ResourceRecord },

    /// Append a review for a resource title.
    SubmitReview { title: String, text: String },

    /// Copy the step list into the saved user data.
    SaveLearningPath,

    /// Dismiss the onboarding tutorial.
    DismissTutorial,

    /// Clear everything except the tutorial flag.
    ResetAll,
}

/// Result of applying an action.
///
/// `Ignored` covers the silent no-op cases (remove from an empty list,
/// save with missing fields, duplicate favorite); the UI may surface a
/// notice, but the state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Changed,
    Ignored,
}

impl Outcome {
    pub fn is_changed(self) -> bool {
        self == Outcome::Changed
    }
}

impl SessionState {
    /// Applies one action, returning whether the state changed.
    pub fn apply(&mut self, action: Action, catalog: &Catalog) -> Outcome {
        match action {
            Action::SelectField { field } => self.select_field(field),
            Action::SaveInputs {
                interests,
                main_field,
                sub_field,
                goal,
            } => self.save_inputs(interests, main_field, sub_field, goal),
            Action::InitSteps { goal } => self.init_steps(&goal, catalog),
            Action::AddStep { text } => self.add_step(text),
            Action::RemoveLastStep => self.remove_last_step(),
            Action::EditSteps { steps } => self.edit_steps(steps),
            Action::ToggleFavorite { resource } => self.toggle_favorite(resource),
            Action::SubmitReview { title, text } => self.submit_review(title, text),
            Action::SaveLearningPath => self.save_learning_path(),
            Action::DismissTutorial => self.dismiss_tutorial(),
            Action::ResetAll => {
                self.reset_all();
                Outcome::Changed
            }
        }
    }

    /// Sets the main field. The sub-field is left as-is, even when it
    /// belongs to the previous field; the UI's own re-selection overwrites
    /// it (see DESIGN.md).
    fn select_field(&mut self, field: String) -> Outcome {
        self.user_data.main_field = field;
        Outcome::Changed
    }

    /// Replaces the saved user data wholesale. Ignored unless field,
    /// sub-field, and goal are all non-empty.
    fn save_inputs(
        &mut self,
        interests: Vec<String>,
        main_field: String,
        sub_field: String,
        goal: String,
    ) -> Outcome {
        if main_field.is_empty() || sub_field.is_empty() || goal.is_empty() {
            return Outcome::Ignored;
        }
        self.user_data = UserData {
            interests,
            main_field,
            sub_field,
            goal,
            learning_path: None,
        };
        Outcome::Changed
    }

    /// Seeds the step list from the goal's checklist, only while empty.
    /// An unrecognized goal seeds nothing.
    fn init_steps(&mut self, goal: &str, catalog: &Catalog) -> Outcome {
        if !self.steps.is_empty() {
            return Outcome::Ignored;
        }
        let checklist = catalog.checklist(goal);
        if checklist.is_empty() {
            return Outcome::Ignored;
        }
        self.steps = checklist.iter().map(|s| s.to_string()).collect();
        Outcome::Changed
    }

    fn add_step(&mut self, text: String) -> Outcome {
        if text.is_empty() {
            return Outcome::Ignored;
        }
        self.steps.push(text);
        Outcome::Changed
    }

    fn remove_last_step(&mut self) -> Outcome {
        match self.steps.pop() {
            Some(_) => Outcome::Changed,
            None => Outcome::Ignored,
        }
    }

    /// Positional replacement: `new_steps[i]` becomes `steps[i]`. Extra
    /// elements beyond the current length are dropped; a session with no
    /// steps ignores the edit entirely.
    fn edit_steps(&mut self, new_steps: Vec<String>) -> Outcome {
        if self.steps.is_empty() {
            return Outcome::Ignored;
        }
        for (slot, edited) in self.steps.iter_mut().zip(new_steps) {
            *slot = edited;
        }
        Outcome::Changed
    }

    /// Appends to favorites iff no existing favorite shares the title.
    fn toggle_favorite(&mut self, resource: ResourceRecord) -> Outcome {
        if self.is_favorite(&resource.title) {
            return Outcome::Ignored;
        }
        self.favorites.push(resource);
        Outcome::Changed
    }

    /// Appends the review text, creating the list on first review.
    /// Review content is not validated; empty text is accepted.
    fn submit_review(&mut self, title: String, text: String) -> Outcome {
        self.reviews.entry(title).or_default().push(text);
        Outcome::Changed
    }

    /// Copies the current steps into the saved user data. Persistence of
    /// the snapshot is the application layer's job.
    fn save_learning_path(&mut self) -> Outcome {
        self.user_data.learning_path = Some(self.steps.clone());
        Outcome::Changed
    }

    fn dismiss_tutorial(&mut self) -> Outcome {
        if !self.show_tutorial {
            return Outcome::Ignored;
        }
        self.show_tutorial = false;
        Outcome::Changed
    }
}
