use mindgen_core::models::label::{
    AnxietyLabel, BipolarLabel, DepressionLabel, detected_conditions,
};
use mindgen_core::models::plan::TreatmentPlan;

use crate::layout::{Marker, section_layout};

const BANNER_WIDTH: usize = 80;

const REPORT_TITLE: &str = "MINDGEN AI\u{ae} PERSONALIZED TREATMENT PLAN REPORT";

/// Render the canonical plain-text report document.
///
/// Fixed structure: title banner, OVERVIEW, CONDITIONS IDENTIFIED (derived
/// from the labels, not the plan), then each non-empty section in layout
/// order, then a footer banner. Empty sections are suppressed entirely.
pub fn format_report(
    plan: &TreatmentPlan,
    dep: DepressionLabel,
    bip: BipolarLabel,
    anx: AnxietyLabel,
) -> String {
    let heavy = "=".repeat(BANNER_WIDTH);
    let light = "-".repeat(BANNER_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(heavy.clone());
    lines.push(REPORT_TITLE.to_string());
    lines.push(heavy.clone());
    gap(&mut lines);

    lines.push("OVERVIEW".to_string());
    lines.push(light.clone());
    lines.push(plan.overview.clone());
    gap(&mut lines);

    lines.push("CONDITIONS IDENTIFIED".to_string());
    lines.push(light.clone());
    let conditions = detected_conditions(dep, bip, anx);
    if conditions.is_empty() {
        lines.push("- No significant mental health conditions detected".to_string());
    } else {
        for name in conditions {
            lines.push(format!("- {name}"));
        }
    }
    gap(&mut lines);

    for section in section_layout(plan) {
        if section.items.is_empty() {
            continue;
        }
        lines.push(section.title.to_string());
        lines.push(light.clone());
        match section.marker {
            Marker::Bullet => {
                for item in section.items.iter() {
                    lines.push(format!("\u{2022} {item}"));
                }
            }
            Marker::Numbered => {
                for (i, item) in section.items.iter().enumerate() {
                    lines.push(format!("{}. {item}", i + 1));
                }
            }
            Marker::Warning => {
                for item in section.items.iter() {
                    lines.push(format!("\u{26a0}\u{fe0f} {item}"));
                }
            }
        }
        gap(&mut lines);
    }

    lines.push(heavy.clone());
    lines.push("END OF REPORT".to_string());
    lines.push(heavy);

    lines.join("\n")
}

// A literal newline line yields a blank-line gap once the lines are joined.
fn gap(lines: &mut Vec<String>) {
    lines.push("\n".to_string());
}
