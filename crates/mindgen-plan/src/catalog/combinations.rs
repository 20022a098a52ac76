use mindgen_core::models::label::{AnxietyLabel, BipolarLabel, Condition, DepressionLabel};

/// A special-considerations rule triggered by the simultaneous presence of
/// two or three condition domains. Subtype is irrelevant to triggering.
pub struct CombinationRule {
    pub requires: &'static [Condition],
    pub considerations: &'static [&'static str],
}

impl CombinationRule {
    /// True when every required domain has a detected condition. Rules are
    /// additive: the triple rule fires alongside the pairwise rules.
    pub fn applies(&self, dep: DepressionLabel, bip: BipolarLabel, anx: AnxietyLabel) -> bool {
        self.requires.iter().all(|condition| match condition {
            Condition::Depression => dep.is_present(),
            Condition::Bipolar => bip.is_present(),
            Condition::Anxiety => anx.is_present(),
        })
    }
}

/// The combination rules, in evaluation order.
pub static COMBINATION_RULES: &[CombinationRule] = &[
    CombinationRule {
        requires: &[Condition::Depression, Condition::Anxiety],
        considerations: &[
            "Address depression first if severe as it may limit anxiety treatment engagement",
            "Consider SNRIs that treat both conditions",
            "Modify CBT to address both disorders simultaneously",
            "Monitor for increased suicide risk with mixed depression/anxiety",
        ],
    },
    CombinationRule {
        requires: &[Condition::Bipolar, Condition::Anxiety],
        considerations: &[
            "Stabilize mood first before aggressively treating anxiety",
            "Avoid benzodiazepines if possible (risk of misuse, worsening depression)",
            "Consider quetiapine or lurasidone which may help both",
            "Address anxiety in context of mood stability",
        ],
    },
    CombinationRule {
        requires: &[Condition::Bipolar, Condition::Depression],
        considerations: &[
            "Differentiate between unipolar and bipolar depression in treatment approach",
            "Caution with antidepressants - use only with mood stabilizer",
            "Consider lamotrigine for bipolar depression",
            "Monitor closely for switching to hypomania/mania",
        ],
    },
    CombinationRule {
        requires: &[Condition::Depression, Condition::Bipolar, Condition::Anxiety],
        considerations: &[
            "Prioritize mood stabilization as foundation",
            "Sequential treatment approach - bipolar stability first, then depression, then anxiety",
            "Consider comprehensive DBT approach for emotion regulation",
            "Multidisciplinary team management essential",
        ],
    },
];
