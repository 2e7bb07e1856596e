//! ExportReportHandler - turns the current user data into a PDF download.

use std::sync::Arc;

use tracing::debug;

use crate::domain::report::{ReportLayout, REPORT_FILE_NAME};
use crate::domain::session::UserData;
use crate::ports::{ReportError, ReportRenderer};

/// MIME type attached to the exported report.
pub const REPORT_MIME: &str = "application/pdf";

/// A rendered report ready to hand to the client.
#[derive(Debug, Clone)]
pub struct PdfExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Handler exporting the progress report.
pub struct ExportReportHandler {
    renderer: Arc<dyn ReportRenderer>,
}

impl ExportReportHandler {
    pub fn new(renderer: Arc<dyn ReportRenderer>) -> Self {
        Self { renderer }
    }

    /// Lays out and renders the report for the given user data.
    ///
    /// Works on whatever has been saved so far, including an entirely
    /// empty snapshot.
    pub fn handle(&self, user_data: &UserData) -> Result<PdfExport, ReportError> {
        let layout = ReportLayout::from_user_data(user_data);
        let bytes = self.renderer.render(&layout)?;
        debug!(size = bytes.len(), "report rendered");

        Ok(PdfExport {
            file_name: REPORT_FILE_NAME,
            mime: REPORT_MIME,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockRenderer {
        layouts: Mutex<Vec<ReportLayout>>,
        fail: bool,
    }

    impl MockRenderer {
        fn new() -> Self {
            Self {
                layouts: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                layouts: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl ReportRenderer for MockRenderer {
        fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
            if self.fail {
                return Err(ReportError::PdfFailed("font missing".to_string()));
            }
            self.layouts.lock().unwrap().push(layout.clone());
            Ok(b"%PDF-1.4".to_vec())
        }
    }

    #[test]
    fn export_carries_fixed_name_and_mime() {
        let handler = ExportReportHandler::new(Arc::new(MockRenderer::new()));

        let export = handler.handle(&UserData::default()).unwrap();

        assert_eq!(export.file_name, "learning_path_report.pdf");
        assert_eq!(export.mime, "application/pdf");
        assert!(!export.bytes.is_empty());
    }

    #[test]
    fn export_renders_the_laid_out_user_data() {
        let renderer = Arc::new(MockRenderer::new());
        let handler = ExportReportHandler::new(renderer.clone());

        let user_data = UserData {
            interests: vec!["Cooking".to_string()],
            main_field: "Cooking".to_string(),
            sub_field: "Baking".to_string(),
            goal: "Improve fitness".to_string(),
            learning_path: None,
        };
        handler.handle(&user_data).unwrap();

        let layouts = renderer.layouts.lock().unwrap();
        assert_eq!(layouts.len(), 1);
        assert!(layouts[0].lines.iter().any(|l| l.text == "sub_field: Baking"));
    }

    #[test]
    fn renderer_failure_propagates() {
        let handler = ExportReportHandler::new(Arc::new(MockRenderer::failing()));

        let result = handler.handle(&UserData::default());

        assert!(matches!(result, Err(ReportError::PdfFailed(_))));
    }
}
