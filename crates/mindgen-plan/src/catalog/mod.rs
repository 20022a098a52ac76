//! Static rule catalog: one module per condition domain, the cross-domain
//! combination rules, and the baseline entries shared by every plan.

pub mod anxiety;
pub mod bipolar;
pub mod combinations;
pub mod depression;

/// Overview text when no condition is detected.
pub const WELLNESS_OVERVIEW: &str =
    "No significant mental health conditions detected. Maintain current wellness practices.";

/// Prefix for the overview line listing the detected conditions.
pub const OVERVIEW_PREFIX: &str = "Comprehensive treatment plan for: ";

/// Evidence-based therapies included in every plan with detected conditions.
pub const BASELINE_THERAPIES: &[&str] = &[
    "Cognitive Behavioral Therapy (tailored to primary diagnosis)",
    "Psychoeducation about condition(s) and treatment",
    "Mindfulness-based interventions",
    "Behavioral activation (especially for depression)",
];

/// Monitoring steps included in every plan with detected conditions.
pub const BASELINE_MONITORING: &[&str] = &[
    "Regular clinical follow-up (frequency depends on severity)",
    "Standardized symptom tracking (e.g., mood charts, anxiety diaries)",
    "Routine labs as needed (lithium levels, metabolic monitoring)",
    "Periodic re-assessment of treatment plan efficacy",
    "Functional outcome assessment (work, relationships, quality of life)",
];
