//! Port for rendering the report layout into a document.

use thiserror::Error;

use crate::domain::report::ReportLayout;

/// Errors from document rendering.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    #[error("PDF generation failed: {0}")]
    PdfFailed(String),
}

/// Renders a laid-out report into document bytes.
///
/// Rendering is pure CPU work on in-memory data, so the contract is
/// synchronous.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ReportError>;
}
