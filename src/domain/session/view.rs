//! Derived view of a session.
//!
//! [`SessionView::render`] is a pure function of (state, catalog, query):
//! after every accepted transition the caller re-renders from scratch, so
//! the view can never drift from the state that produced it.

use serde::Serialize;

use crate::domain::catalog::{self, Catalog, ResourceRecord, ResourceType};

use super::state::{SessionState, UserData};

/// One numbered step line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub index: usize,
    pub text: String,
}

/// A recommended resource decorated with per-session data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceView {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub link: String,
    pub favorite: bool,
    pub reviews: Vec<String>,
}

/// Everything the UI needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub show_tutorial: bool,
    pub user_data: UserData,
    pub steps: Vec<StepView>,
    pub resources: Vec<ResourceView>,
    pub favorites: Vec<ResourceRecord>,
}

impl SessionView {
    /// Renders the current state against the catalog.
    ///
    /// Resources are shown only once a field and sub-field have been saved,
    /// filtered by `query` (empty query shows all, in catalog order).
    pub fn render(state: &SessionState, catalog: &Catalog, query: &str) -> Self {
        let steps = state
            .steps
            .iter()
            .enumerate()
            .map(|(i, text)| StepView {
                index: i + 1,
                text: text.clone(),
            })
            .collect();

        let resources = if !state.user_data.main_field.is_empty()
            && !state.user_data.sub_field.is_empty()
        {
            let records =
                catalog.lookup(&state.user_data.main_field, &state.user_data.sub_field);
            catalog::filter(records, query)
                .into_iter()
                .map(|r| ResourceView {
                    favorite: state.is_favorite(&r.title),
                    reviews: state.reviews_for(&r.title).to_vec(),
                    title: r.title,
                    resource_type: r.resource_type,
                    link: r.link,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            show_tutorial: state.show_tutorial,
            user_data: state.user_data.clone(),
            steps,
            resources,
            favorites: state.favorites.clone(),
        }
    }
}
