//! PDF Report Renderer Adapter
//!
//! Draws the report layout onto US letter pages with the built-in
//! Helvetica font. Coordinates are in points from the bottom-left corner:
//! the title sits at y=750, lines step down 20 points, and indented lines
//! shift from x=100 to x=120.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::domain::report::{ReportLayout, REPORT_TITLE};
use crate::ports::{ReportError, ReportRenderer};

const PAGE_WIDTH: Pt = Pt(612.0);
const PAGE_HEIGHT: Pt = Pt(792.0);

const TITLE_Y: f32 = 750.0;
const LINE_STEP: f32 = 20.0;
const MARGIN_X: f32 = 100.0;
const INDENT_X: f32 = 120.0;
const BOTTOM_Y: f32 = 50.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

/// printpdf-backed report renderer
#[derive(Debug, Clone, Default)]
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
        let (doc, page, layer) = PdfDocument::new(
            REPORT_TITLE,
            Mm::from(PAGE_WIDTH),
            Mm::from(PAGE_HEIGHT),
            "content",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::PdfFailed(e.to_string()))?;

        let mut current_layer = doc.get_page(page).get_layer(layer);
        let mut y = TITLE_Y;

        current_layer.use_text(
            REPORT_TITLE,
            TITLE_SIZE,
            Mm::from(Pt(MARGIN_X)),
            Mm::from(Pt(y)),
            &font,
        );
        y -= 2.0 * LINE_STEP;

        for line in &layout.lines {
            if y < BOTTOM_Y {
                let (next_page, next_layer) = doc.add_page(
                    Mm::from(PAGE_WIDTH),
                    Mm::from(PAGE_HEIGHT),
                    "content",
                );
                current_layer = doc.get_page(next_page).get_layer(next_layer);
                y = TITLE_Y;
            }

            let x = if line.indented { INDENT_X } else { MARGIN_X };
            current_layer.use_text(
                line.text.as_str(),
                BODY_SIZE,
                Mm::from(Pt(x)),
                Mm::from(Pt(y)),
                &font,
            );
            y -= LINE_STEP;
        }

        doc.save_to_bytes()
            .map_err(|e| ReportError::PdfFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ReportLayout;
    use crate::domain::session::UserData;

    fn sample_layout() -> ReportLayout {
        ReportLayout::from_user_data(&UserData {
            interests: vec!["Programming".to_string()],
            main_field: "Programming".to_string(),
            sub_field: "Rust".to_string(),
            goal: "Learn a new skill".to_string(),
            learning_path: Some(vec!["Identify the skill you want to learn".to_string()]),
        })
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let renderer = PdfReportRenderer::new();

        let bytes = renderer.render(&sample_layout()).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_handles_empty_user_data() {
        let renderer = PdfReportRenderer::new();
        let layout = ReportLayout::from_user_data(&UserData::default());

        let bytes = renderer.render(&layout).unwrap();

        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_render_survives_overflowing_line_count() {
        let renderer = PdfReportRenderer::new();
        let mut layout = sample_layout();
        for i in 0..120 {
            layout.lines.push(crate::domain::report::ReportLine {
                text: format!("- extra step {}", i),
                indented: true,
            });
        }

        let bytes = renderer.render(&layout).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
