use mindgen_core::models::label::{Condition, DepressionLabel};

use crate::DomainRules;

/// Depression rule set. Five subtypes; serotonin-pathway genetics
/// (5-HTTLPR, COMT, MAOA, BDNF, MTHFR) drive the genetic and nutrigenomic
/// fragments.
pub struct Depression;

impl DomainRules for Depression {
    type Label = DepressionLabel;

    fn condition(&self) -> Condition {
        Condition::Depression
    }

    fn genetic(&self) -> &'static [&'static str] {
        &[
            "Review 5-HTTLPR, COMT, and MAOA genotypes for serotonin metabolism insights",
            "Assess BDNF levels and genetic variants for neuroplasticity impact",
            "Evaluate MTHFR status for folate metabolism implications",
        ]
    }

    fn diagnostic(&self) -> &'static [&'static str] {
        &[
            "Confirm diagnosis with structured clinical interview (e.g., SCID)",
            "Assess severity using PHQ-9 and clinician-rated scales",
            "Evaluate for comorbid medical conditions affecting mood",
        ]
    }

    fn pharmacological(&self) -> &'static [&'static str] {
        &[
            "Select antidepressant based on genetic profile and subtype",
            "Consider SSRI first-line unless contraindicated",
            "Monitor for 4-6 weeks before assessing efficacy",
            "Adjust dose based on therapeutic drug monitoring if available",
        ]
    }

    fn nutrigenomic(&self) -> &'static [&'static str] {
        &[
            "Ensure adequate tryptophan intake (precursor to serotonin)",
            "Optimize omega-3 fatty acids (EPA/DHA 1-2g daily)",
            "Consider methylfolate if MTHFR variants present",
            "Address potential micronutrient deficiencies (B12, zinc, magnesium)",
        ]
    }

    fn lifestyle(&self) -> &'static [&'static str] {
        &[
            "Regular aerobic exercise (3-5x/week)",
            "Sleep hygiene education and regulation",
            "Structured daily routine",
            "Social connection and support system building",
        ]
    }

    fn interventions(&self, label: DepressionLabel) -> &'static [&'static str] {
        match label {
            DepressionLabel::Absent => &[],
            DepressionLabel::MajorDepressiveDisorder => &[
                "Initiate evidence-based psychotherapy (CBT or IPT)",
                "Consider pharmacogenomic testing for antidepressant selection",
                "Implement mood monitoring system",
                "Assess suicide risk and develop safety plan",
            ],
            DepressionLabel::PersistentDepressiveDisorder => &[
                "Long-term psychotherapy approach (CBT or psychodynamic)",
                "Consider combination treatment with medication and therapy",
                "Focus on building resilience and coping strategies",
                "Address chronic stressors and interpersonal factors",
            ],
            DepressionLabel::AtypicalDepression => &[
                "Prioritize MAOIs or SSRIs with noradrenergic effects",
                "Focus on regulating sleep and appetite patterns",
                "Behavioral activation to counteract lethargy",
                "Address rejection sensitivity in therapy",
            ],
            DepressionLabel::PsychoticDepression => &[
                "Requires combination of antidepressant and antipsychotic",
                "Close monitoring for safety concerns",
                "Consider inpatient care if severe",
                "Family education and support",
            ],
            DepressionLabel::SeasonalAffectiveDisorder => &[
                "Light therapy (10,000 lux for 30-45 min daily)",
                "Consider vitamin D supplementation",
                "Timed melatonin administration",
                "Cognitive-behavioral therapy adapted for SAD",
            ],
        }
    }

    fn therapies(&self) -> &'static [&'static str] {
        &["Behavioral Activation", "Problem-Solving Therapy"]
    }

    fn monitoring(&self) -> &'static [&'static str] {
        &[
            "Suicide risk reassessment at each contact",
            "PHQ-9 tracking over time",
        ]
    }
}
