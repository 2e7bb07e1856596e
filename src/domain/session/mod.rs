//! Session state and transition rules.
//!
//! A session is one user's isolated state lifetime, from app open to close
//! or reset. All mutation goes through [`SessionState::apply`], one action
//! at a time; derived views are computed by [`SessionView::render`] after
//! each accepted transition.

mod actions;
mod state;
mod view;

pub use actions::{Action, Outcome};
pub use state::{SessionState, UserData};
pub use view::{ResourceView, SessionView, StepView};
