use mindgen_core::models::label::{BipolarLabel, Condition};

use crate::DomainRules;

/// Bipolar disorder rule set. Calcium-channel genetics (ANK3, CACNA1C, ODZ4)
/// and circadian disruption drive the genetic fragments; mood stabilization
/// anchors the subtype interventions.
pub struct Bipolar;

impl DomainRules for Bipolar {
    type Label = BipolarLabel;

    fn condition(&self) -> Condition {
        Condition::Bipolar
    }

    fn genetic(&self) -> &'static [&'static str] {
        &[
            "Review ANK3, CACNA1C, and ODZ4 variants for calcium channel insights",
            "Assess circadian gene polymorphisms",
            "Evaluate mitochondrial DNA variants if dysfunction suspected",
        ]
    }

    fn diagnostic(&self) -> &'static [&'static str] {
        &[
            "Confirm diagnosis with MINI or SCID",
            "Detailed mood episode history and family history",
            "Rule out substance-induced mood episodes",
            "Assess for mixed features",
        ]
    }

    fn pharmacological(&self) -> &'static [&'static str] {
        &[
            "Avoid antidepressants without mood stabilizer in BD-I",
            "Consider lithium for suicide prevention in BD",
            "Monitor valproate levels in women of childbearing age",
            "Adjust treatment based on phase (acute vs maintenance)",
        ]
    }

    fn nutrigenomic(&self) -> &'static [&'static str] {
        &[
            "Ensure adequate omega-3 intake (may have mood stabilizing effects)",
            "Consider N-acetylcysteine as adjunctive",
            "Monitor homocysteine levels (may relate to folate metabolism)",
            "Address circadian-related nutrition (timed meals, caffeine management)",
        ]
    }

    fn lifestyle(&self) -> &'static [&'static str] {
        &[
            "Strict sleep-wake cycle maintenance",
            "Social rhythm therapy to stabilize daily patterns",
            "Stress reduction techniques",
            "Avoidance of substances and sleep deprivation",
        ]
    }

    fn interventions(&self, label: BipolarLabel) -> &'static [&'static str] {
        match label {
            BipolarLabel::Absent => &[],
            BipolarLabel::BipolarI => &[
                "Mood stabilizer as foundation (lithium, valproate, or lamotrigine)",
                "Monitor for manic/hypomanic symptoms closely",
                "Psychoeducation about illness course",
                "Develop relapse prevention plan",
            ],
            BipolarLabel::BipolarII => &[
                "Lamotrigine or quetiapine as first-line",
                "Focus on depression prevention",
                "Careful monitoring for hypomania with antidepressants",
                "Address interpersonal and social rhythm disruptions",
            ],
            BipolarLabel::Cyclothymia => &[
                "Consider low-dose mood stabilizer if impairing",
                "Focus on lifestyle regularity",
                "Cognitive therapy for mood swings",
                "Monitor for progression to BD-I or II",
            ],
        }
    }

    fn therapies(&self) -> &'static [&'static str] {
        &[
            "Interpersonal and Social Rhythm Therapy (IPSRT)",
            "Family-focused therapy for bipolar disorder",
        ]
    }

    fn monitoring(&self) -> &'static [&'static str] {
        &[
            "Mood episode symptom monitoring",
            "Early warning sign identification plan",
        ]
    }
}
