use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body and list text.
    pub body_font: String,

    /// Font for the title and section headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Document title font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub heading_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            title_size: 18,
            heading_size: 14,
        }
    }
}
