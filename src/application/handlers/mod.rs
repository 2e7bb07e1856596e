//! Command handlers.
//!
//! Each handler drives one operation: apply a session action, export the
//! progress report, or relay a review by email.

mod apply_action;
mod export_report;
mod send_review;

pub use apply_action::{ActionApplied, ApplyActionHandler};
pub use export_report::{ExportReportHandler, PdfExport};
pub use send_review::{validate_email, NotifyError, SendReviewCommand, SendReviewHandler};
