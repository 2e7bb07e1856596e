//! Static reference catalog.
//!
//! The catalog is the app's only data source: a nested mapping from main
//! field to sub-field to an ordered list of resource records, plus the
//! predefined checklist for each learning goal and the option lists the UI
//! offers. It is built once at startup from embedded constants and never
//! mutated.

mod checklists;
mod record;
mod resources;

pub use record::{ResourceRecord, ResourceType};

use once_cell::sync::Lazy;

/// A main field with its ordered sub-fields.
#[derive(Debug, Clone)]
pub(crate) struct FieldEntry {
    pub name: &'static str,
    pub sub_fields: Vec<SubFieldEntry>,
}

/// A sub-field with its ordered resource list.
#[derive(Debug, Clone)]
pub(crate) struct SubFieldEntry {
    pub name: &'static str,
    pub resources: Vec<ResourceRecord>,
}

/// Immutable catalog of resources, checklists, and selectable options.
#[derive(Debug)]
pub struct Catalog {
    fields: Vec<FieldEntry>,
    checklists: Vec<(&'static str, &'static [&'static str])>,
    goals: Vec<&'static str>,
    interests: Vec<&'static str>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    fields: resources::builtin_fields(),
    checklists: checklists::builtin_checklists(),
    goals: checklists::GOALS.to_vec(),
    interests: checklists::INTERESTS.to_vec(),
});

const NO_RESOURCES: &[ResourceRecord] = &[];
const NO_STEPS: &[&str] = &[];

impl Catalog {
    /// The embedded catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Resources for a field / sub-field pair, in catalog order.
    ///
    /// Unknown keys yield an empty slice, never an error.
    pub fn lookup(&self, field: &str, sub_field: &str) -> &[ResourceRecord] {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .and_then(|f| f.sub_fields.iter().find(|s| s.name == sub_field))
            .map(|s| s.resources.as_slice())
            .unwrap_or(NO_RESOURCES)
    }

    /// Predefined checklist steps for a goal, empty if unrecognized.
    pub fn checklist(&self, goal: &str) -> &[&'static str] {
        self.checklists
            .iter()
            .find(|(g, _)| *g == goal)
            .map(|(_, steps)| *steps)
            .unwrap_or(NO_STEPS)
    }

    /// Selectable main fields, in catalog order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Sub-fields of a main field, empty for unknown fields.
    pub fn sub_fields(&self, field: &str) -> Vec<&'static str> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.sub_fields.iter().map(|s| s.name).collect())
            .unwrap_or_default()
    }

    /// Selectable goals.
    pub fn goals(&self) -> &[&'static str] {
        &self.goals
    }

    /// Selectable interests.
    pub fn interests(&self) -> &[&'static str] {
        &self.interests
    }
}

/// Retain resources whose title contains `query` case-insensitively.
///
/// An empty query returns all records unfiltered; order is preserved.
pub fn filter(resources: &[ResourceRecord], query: &str) -> Vec<ResourceRecord> {
    if query.is_empty() {
        return resources.to_vec();
    }
    let needle = query.to_lowercase();
    resources
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
