//! HTTP DTOs for the learning path API.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Catalog, ResourceRecord};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for rendering a session view.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewQuery {
    /// Resource search text, empty shows everything
    #[serde(default)]
    pub query: String,
}

/// Query parameters for the resource lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesQuery {
    pub field: String,
    pub sub_field: String,
    #[serde(default)]
    pub query: String,
}

/// Review or rating feedback to relay to the admin.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackRequest {
    /// A resource review, optionally signed with the reviewer's address.
    Review {
        review: String,
        #[serde(default)]
        email: Option<String>,
    },
    /// App feedback with a 1-5 star rating.
    Rating { rating: u8, text: String },
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response after opening a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOpenedResponse {
    pub session_id: String,
    pub message: String,
}

/// Response after applying an action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    /// False when the action was silently ignored
    pub changed: bool,
    /// Set when the user data snapshot could not be written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Selectable options for building a learning path.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogOptionsResponse {
    pub fields: Vec<FieldOptions>,
    pub goals: Vec<String>,
    pub interests: Vec<String>,
}

/// A main field with its sub-fields, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct FieldOptions {
    pub name: String,
    pub sub_fields: Vec<String>,
}

impl CatalogOptionsResponse {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            fields: catalog
                .fields()
                .into_iter()
                .map(|name| FieldOptions {
                    name: name.to_string(),
                    sub_fields: catalog
                        .sub_fields(name)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                })
                .collect(),
            goals: catalog.goals().iter().map(|g| g.to_string()).collect(),
            interests: catalog.interests().iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// Resource lookup results.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceListResponse {
    pub resources: Vec<ResourceRecord>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            code: "UNPROCESSABLE".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_GATEWAY".to_string(),
            message: message.into(),
        }
    }
}
