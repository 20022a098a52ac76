use mindgen_core::models::label::{AnxietyLabel, Condition};

use crate::DomainRules;

/// Anxiety disorder rule set. Exposure-based interventions differ sharply by
/// subtype; the unconditional fragments center on serotonin transporter and
/// GABA-pathway genetics.
pub struct Anxiety;

impl DomainRules for Anxiety {
    type Label = AnxietyLabel;

    fn condition(&self) -> Condition {
        Condition::Anxiety
    }

    fn genetic(&self) -> &'static [&'static str] {
        &[
            "Review SLC6A4 and other serotonin transporter variants",
            "Assess COMT Val158Met for stress response impact",
            "Evaluate GABA receptor polymorphisms if panic features present",
        ]
    }

    fn diagnostic(&self) -> &'static [&'static str] {
        &[
            "Confirm diagnosis with ADIS or similar structured interview",
            "Assess avoidance behaviors and functional impact",
            "Rule out medical causes (hyperthyroidism, etc.)",
            "Evaluate for trauma history if relevant",
        ]
    }

    fn pharmacological(&self) -> &'static [&'static str] {
        &[
            "Consider SSRI/SNRI as first-line pharmacotherapy",
            "Short-term benzodiazepine only if severe impairment",
            "Monitor for initial anxiety exacerbation with SSRIs",
            "Consider buspirone for GAD if SSRI not tolerated",
        ]
    }

    fn nutrigenomic(&self) -> &'static [&'static str] {
        &[
            "Ensure balanced blood sugar (avoid hypoglycemia triggers)",
            "Consider L-theanine and magnesium for relaxation",
            "Monitor caffeine and alcohol intake",
            "Adequate protein intake for amino acid precursors",
        ]
    }

    fn lifestyle(&self) -> &'static [&'static str] {
        &[
            "Regular exercise (yoga can be particularly helpful)",
            "Breathing and relaxation practice",
            "Stimulant reduction (caffeine, nicotine)",
            "Sleep hygiene optimization",
        ]
    }

    fn interventions(&self, label: AnxietyLabel) -> &'static [&'static str] {
        match label {
            AnxietyLabel::Absent => &[],
            AnxietyLabel::GeneralizedAnxiety => &[
                "CBT with worry exposure and cognitive restructuring",
                "Mindfulness-based stress reduction",
                "Address intolerance of uncertainty",
                "Problem-solving skills training",
            ],
            AnxietyLabel::PanicDisorder => &[
                "Interoceptive exposure therapy",
                "Cognitive restructuring of catastrophic interpretations",
                "Breathing retraining",
                "Gradual exposure to avoided situations",
            ],
            AnxietyLabel::SocialAnxiety => &[
                "Social skills training if deficits present",
                "Cognitive restructuring of negative beliefs",
                "Exposure to social situations",
                "Attention retraining for self-focused attention",
            ],
            AnxietyLabel::Agoraphobia => &[
                "In vivo exposure hierarchy development",
                "Cognitive challenging of safety behaviors",
                "Gradual expansion of safe zone",
                "Partner/family involvement if helpful",
            ],
            AnxietyLabel::SpecificPhobia => &[
                "Exposure therapy tailored to phobic stimulus",
                "Systematic desensitization",
                "Cognitive restructuring of threat appraisal",
                "Modeling and reinforcement techniques",
            ],
        }
    }

    fn therapies(&self) -> &'static [&'static str] {
        &[
            "Exposure-based therapies",
            "Acceptance and Commitment Therapy (ACT)",
        ]
    }

    fn monitoring(&self) -> &'static [&'static str] {
        &[
            "Exposure hierarchy progress tracking",
            "Anxiety diary review",
        ]
    }
}
