//! HTTP handlers for the learning path API.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::application::handlers::{
    ApplyActionHandler, ExportReportHandler, NotifyError, SendReviewCommand, SendReviewHandler,
};
use crate::domain::catalog::{self, Catalog};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{Action, SessionView};
use crate::ports::{MailRelayError, ReportError};

use super::dto::{
    ActionResponse, CatalogOptionsResponse, ErrorResponse, FeedbackRequest, ResourceListResponse,
    ResourcesQuery, SessionOpenedResponse, ViewQuery,
};
use super::registry::SessionRegistry;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AppHandlers {
    catalog: &'static Catalog,
    registry: SessionRegistry,
    apply_handler: Arc<ApplyActionHandler>,
    report_handler: Arc<ExportReportHandler>,
    review_handler: Arc<SendReviewHandler>,
}

impl AppHandlers {
    pub fn new(
        catalog: &'static Catalog,
        registry: SessionRegistry,
        apply_handler: Arc<ApplyActionHandler>,
        report_handler: Arc<ExportReportHandler>,
        review_handler: Arc<SendReviewHandler>,
    ) -> Self {
        Self {
            catalog,
            registry,
            apply_handler,
            report_handler,
            review_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Session endpoints
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Open a fresh session
pub async fn open_session(State(handlers): State<AppHandlers>) -> Response {
    let session_id = handlers.registry.open().await;

    let response = SessionOpenedResponse {
        session_id: session_id.to_string(),
        message: "Session opened".to_string(),
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

/// GET /api/sessions/:id - Rendered view of the current state
pub async fn get_session(
    State(handlers): State<AppHandlers>,
    Path(session_id): Path<String>,
    Query(params): Query<ViewQuery>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let result = handlers
        .registry
        .read(session_id, |state| {
            SessionView::render(state, handlers.catalog, &params.query)
        })
        .await;

    match result {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /api/sessions/:id - End the session, state discarded
pub async fn close_session(
    State(handlers): State<AppHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if handlers.registry.close(session_id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        handle_domain_error(DomainError::SessionNotFound(session_id))
    }
}

/// POST /api/sessions/:id/actions - Apply one action
pub async fn apply_action(
    State(handlers): State<AppHandlers>,
    Path(session_id): Path<String>,
    Json(action): Json<Action>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .registry
        .apply(session_id, action, &handlers.apply_handler)
        .await
    {
        Ok(applied) => {
            let response = ActionResponse {
                changed: applied.outcome.is_changed(),
                warning: applied
                    .snapshot_error
                    .map(|e| format!("Learning path saved, but the snapshot failed: {}", e)),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/sessions/:id/report - PDF download of the saved user data
pub async fn export_report(
    State(handlers): State<AppHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let user_data = match handlers.registry.user_data(session_id).await {
        Ok(user_data) => user_data,
        Err(e) => return handle_domain_error(e),
    };

    match handlers.report_handler.handle(&user_data) {
        Ok(export) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, export.mime.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.file_name),
                ),
            ],
            export.bytes,
        )
            .into_response(),
        Err(ReportError::PdfFailed(msg)) => {
            error!(error = %msg, "report rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Report rendering failed")),
            )
                .into_response()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Feedback endpoint
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/feedback - Relay a review or app rating to the admin
pub async fn submit_feedback(
    State(handlers): State<AppHandlers>,
    Json(request): Json<FeedbackRequest>,
) -> Response {
    let cmd = match request {
        FeedbackRequest::Review { review, email } => SendReviewCommand::review(review, email),
        FeedbackRequest::Rating { rating, text } => {
            if !(1..=5).contains(&rating) {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse::unprocessable("Rating must be between 1 and 5")),
                )
                    .into_response();
            }
            SendReviewCommand::feedback(rating, text)
        }
    };

    match handlers.review_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Thank you for your feedback!" })),
        )
            .into_response(),
        Err(e) => handle_notify_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Catalog endpoints
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/catalog/options - Selectable fields, sub-fields, goals, interests
pub async fn catalog_options(State(handlers): State<AppHandlers>) -> Response {
    let response = CatalogOptionsResponse::from_catalog(handlers.catalog);
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/catalog/resources - Lookup and filter resources for a field pair
pub async fn catalog_resources(
    State(handlers): State<AppHandlers>,
    Query(params): Query<ResourcesQuery>,
) -> Response {
    let records = handlers.catalog.lookup(&params.field, &params.sub_field);
    let response = ResourceListResponse {
        resources: catalog::filter(records, &params.query),
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn handle_domain_error(error: DomainError) -> Response {
    match error {
        DomainError::SessionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
    }
}

fn handle_notify_error(error: NotifyError) -> Response {
    match error {
        NotifyError::InvalidEmail => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::unprocessable(error.to_string())),
        )
            .into_response(),
        NotifyError::Relay(MailRelayError::NotConfigured(_)) => {
            warn!(error = %error, "mail relay is not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(error.to_string())),
            )
                .into_response()
        }
        NotifyError::Relay(MailRelayError::Transport(_)) => {
            warn!(error = %error, "mail relay transport failure");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::bad_gateway(error.to_string())),
            )
                .into_response()
        }
    }
}
