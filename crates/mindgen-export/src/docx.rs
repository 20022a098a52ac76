use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::debug;

use mindgen_core::models::label::{
    AnxietyLabel, BipolarLabel, DepressionLabel, detected_conditions,
};
use mindgen_core::models::plan::TreatmentPlan;

use crate::error::ExportError;
use crate::layout::{Marker, section_layout};
use crate::styles::DocumentStyles;

/// Render a treatment plan as a paginated DOCX document: title, conditions
/// block, then one heading per non-empty section with its items as bullet,
/// numbered, or warning paragraphs per that section's marker convention.
pub fn generate_docx(
    plan: &TreatmentPlan,
    dep: DepressionLabel,
    bip: BipolarLabel,
    anx: AnxietyLabel,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.heading_size));

    docx = docx.add_paragraph(heading_paragraph(
        "MindGen AI - Personalized Mental Health Report",
        "Title",
        styles,
    ));
    docx = docx.add_paragraph(body_paragraph(&plan.overview, styles));
    docx = docx.add_paragraph(Paragraph::new());

    docx = docx.add_paragraph(heading_paragraph("Conditions Identified", "Heading1", styles));
    let conditions = detected_conditions(dep, bip, anx);
    if conditions.is_empty() {
        docx = docx.add_paragraph(marked_paragraph(
            "\u{2022} ",
            "No significant mental health conditions detected",
            styles,
        ));
    } else {
        for name in conditions {
            docx = docx.add_paragraph(marked_paragraph("\u{2022} ", name, styles));
        }
    }

    for section in section_layout(plan) {
        if section.items.is_empty() {
            continue;
        }
        docx = docx.add_paragraph(heading_paragraph(section.title, "Heading1", styles));
        match section.marker {
            Marker::Bullet => {
                for item in section.items.iter() {
                    docx = docx.add_paragraph(marked_paragraph("\u{2022} ", item, styles));
                }
            }
            Marker::Numbered => {
                for (i, item) in section.items.iter().enumerate() {
                    let number = format!("{}. ", i + 1);
                    docx = docx.add_paragraph(marked_paragraph(&number, item, styles));
                }
            }
            Marker::Warning => {
                for item in section.items.iter() {
                    docx = docx.add_paragraph(marked_paragraph("\u{26a0}\u{fe0f} ", item, styles));
                }
            }
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    debug!(bytes = bytes.len(), "generated treatment plan DOCX");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(text, styles))
}

fn marked_paragraph(marker: &str, text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(marker, styles))
        .add_run(body_run(text, styles))
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}
