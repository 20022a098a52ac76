use mindgen_core::models::plan::{SectionList, TreatmentPlan};

/// Item rendering convention for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// "• item"
    Bullet,
    /// "1. item", 1-based
    Numbered,
    /// "⚠️ item"
    Warning,
}

/// One section ready for rendering.
pub struct SectionLayout<'a> {
    pub title: &'static str,
    pub marker: Marker,
    pub items: &'a SectionList,
}

/// The nine sequence sections of a plan, in fixed render order with their
/// display titles and marker conventions. Both the text formatter and the
/// DOCX renderer consume this.
pub fn section_layout(plan: &TreatmentPlan) -> [SectionLayout<'_>; 9] {
    [
        SectionLayout {
            title: "GENETIC CONSIDERATIONS",
            marker: Marker::Bullet,
            items: &plan.genetic_considerations,
        },
        SectionLayout {
            title: "DIAGNOSTIC CONFIRMATION STEPS",
            marker: Marker::Bullet,
            items: &plan.diagnostic_confirmation,
        },
        SectionLayout {
            title: "PERSONALIZED INTERVENTIONS",
            marker: Marker::Numbered,
            items: &plan.personalized_interventions,
        },
        SectionLayout {
            title: "PHARMACOLOGICAL APPROACH",
            marker: Marker::Numbered,
            items: &plan.pharmacological_approach,
        },
        SectionLayout {
            title: "NUTRIGENOMIC RECOMMENDATIONS",
            marker: Marker::Bullet,
            items: &plan.nutrigenomic_recommendations,
        },
        SectionLayout {
            title: "LIFESTYLE MODIFICATIONS",
            marker: Marker::Bullet,
            items: &plan.lifestyle_modifications,
        },
        SectionLayout {
            title: "THERAPEUTIC APPROACHES",
            marker: Marker::Numbered,
            items: &plan.therapeutic_approaches,
        },
        SectionLayout {
            title: "MONITORING AND FOLLOW-UP PLAN",
            marker: Marker::Bullet,
            items: &plan.monitoring_and_followup,
        },
        SectionLayout {
            title: "SPECIAL CONSIDERATIONS",
            marker: Marker::Warning,
            items: &plan.special_considerations,
        },
    ]
}
