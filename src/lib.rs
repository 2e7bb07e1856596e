//! Learning Path Creator - Interactive learning plan service
//!
//! This crate builds personalized learning paths from a static resource
//! catalog: field and goal selection, editable step checklists, favorites
//! and reviews, PDF progress reports, and review relay by email.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
