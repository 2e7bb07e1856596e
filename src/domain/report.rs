//! Flat line layout for the progress report.
//!
//! The layout is pure data: a title plus one line per user-data field, with
//! list-valued fields rendered as a label line followed by one indented
//! line per element. Turning the lines into PDF bytes is an adapter concern.

use crate::domain::session::UserData;

/// Fixed download name for the exported report.
pub const REPORT_FILE_NAME: &str = "learning_path_report.pdf";

/// Report title drawn at the top of the page.
pub const REPORT_TITLE: &str = "Learning Path Report";

/// A single report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub indented: bool,
}

impl ReportLine {
    fn flush(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indented: false,
        }
    }

    fn item(text: impl Into<String>) -> Self {
        Self {
            text: format!("- {}", text.into()),
            indented: true,
        }
    }
}

/// The laid-out report, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub lines: Vec<ReportLine>,
}

impl ReportLayout {
    /// Lays out the user data in snapshot field order.
    pub fn from_user_data(user_data: &UserData) -> Self {
        let mut lines = Vec::new();

        lines.push(ReportLine::flush("interests:"));
        for interest in &user_data.interests {
            lines.push(ReportLine::item(interest));
        }

        lines.push(ReportLine::flush(format!(
            "main_field: {}",
            user_data.main_field
        )));
        lines.push(ReportLine::flush(format!(
            "sub_field: {}",
            user_data.sub_field
        )));
        lines.push(ReportLine::flush(format!("goal: {}", user_data.goal)));

        if let Some(path) = &user_data.learning_path {
            lines.push(ReportLine::flush("learning_path:"));
            for step in path {
                lines.push(ReportLine::item(step));
            }
        }

        Self { lines }
    }
}
