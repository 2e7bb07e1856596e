//! Report adapters implementing the `ReportRenderer` port.

mod pdf_renderer;

pub use pdf_renderer::PdfReportRenderer;
