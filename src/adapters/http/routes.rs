//! HTTP routes for the learning path API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    apply_action, catalog_options, catalog_resources, close_session, export_report, get_session,
    open_session, submit_feedback, AppHandlers,
};

/// Creates the API router with all endpoints.
pub fn api_routes(handlers: AppHandlers) -> Router {
    Router::new()
        .route("/api/sessions", post(open_session))
        .route("/api/sessions/:id", get(get_session).delete(close_session))
        .route("/api/sessions/:id/actions", post(apply_action))
        .route("/api/sessions/:id/report", get(export_report))
        .route("/api/feedback", post(submit_feedback))
        .route("/api/catalog/options", get(catalog_options))
        .route("/api/catalog/resources", get(catalog_resources))
        .with_state(handlers)
}
