use mindgen_core::models::label::{AnxietyLabel, BipolarLabel, DepressionLabel};
use mindgen_core::models::plan::SectionList;
use mindgen_plan::compose;

fn assert_no_duplicates(section: &SectionList) {
    let items: Vec<&str> = section.iter().collect();
    for (i, item) in items.iter().enumerate() {
        assert!(
            !items[i + 1..].contains(item),
            "duplicate section item: {item}"
        );
    }
}

#[test]
fn all_absent_yields_wellness_overview_and_empty_sections() {
    let plan = compose(
        DepressionLabel::Absent,
        BipolarLabel::Absent,
        AnxietyLabel::Absent,
    );

    assert_eq!(
        plan.overview,
        "No significant mental health conditions detected. Maintain current wellness practices."
    );
    assert!(plan.genetic_considerations.is_empty());
    assert!(plan.diagnostic_confirmation.is_empty());
    assert!(plan.personalized_interventions.is_empty());
    assert!(plan.pharmacological_approach.is_empty());
    assert!(plan.nutrigenomic_recommendations.is_empty());
    assert!(plan.lifestyle_modifications.is_empty());
    assert!(plan.therapeutic_approaches.is_empty());
    assert!(plan.monitoring_and_followup.is_empty());
    assert!(plan.special_considerations.is_empty());
}

#[test]
fn compose_is_deterministic() {
    let first = compose(
        DepressionLabel::AtypicalDepression,
        BipolarLabel::Cyclothymia,
        AnxietyLabel::SocialAnxiety,
    );
    let second = compose(
        DepressionLabel::AtypicalDepression,
        BipolarLabel::Cyclothymia,
        AnxietyLabel::SocialAnxiety,
    );
    assert_eq!(first, second);
}

#[test]
fn overview_lists_conditions_in_domain_order() {
    let plan = compose(
        DepressionLabel::PsychoticDepression,
        BipolarLabel::BipolarII,
        AnxietyLabel::Agoraphobia,
    );
    assert_eq!(
        plan.overview,
        "Comprehensive treatment plan for: Psychotic Depression, BD-II, Agoraphobia"
    );
}

#[test]
fn every_section_is_free_of_duplicates() {
    let plan = compose(
        DepressionLabel::MajorDepressiveDisorder,
        BipolarLabel::BipolarI,
        AnxietyLabel::GeneralizedAnxiety,
    );

    assert_no_duplicates(&plan.genetic_considerations);
    assert_no_duplicates(&plan.diagnostic_confirmation);
    assert_no_duplicates(&plan.personalized_interventions);
    assert_no_duplicates(&plan.pharmacological_approach);
    assert_no_duplicates(&plan.nutrigenomic_recommendations);
    assert_no_duplicates(&plan.lifestyle_modifications);
    assert_no_duplicates(&plan.therapeutic_approaches);
    assert_no_duplicates(&plan.monitoring_and_followup);
    assert_no_duplicates(&plan.special_considerations);
}

#[test]
fn all_four_combination_rule_groups_fire_on_triple_presence() {
    let plan = compose(
        DepressionLabel::MajorDepressiveDisorder,
        BipolarLabel::BipolarI,
        AnxietyLabel::GeneralizedAnxiety,
    );

    // One representative item per trigger set.
    assert!(plan.special_considerations.contains("Consider SNRIs that treat both conditions"));
    assert!(
        plan.special_considerations
            .contains("Stabilize mood first before aggressively treating anxiety")
    );
    assert!(plan.special_considerations.contains("Consider lamotrigine for bipolar depression"));
    assert!(plan.special_considerations.contains("Multidisciplinary team management essential"));

    // Four groups of four distinct items, nothing lost to dedup.
    assert_eq!(plan.special_considerations.len(), 16);
}

#[test]
fn pairwise_rules_fire_independently() {
    let plan = compose(
        DepressionLabel::MajorDepressiveDisorder,
        BipolarLabel::Absent,
        AnxietyLabel::PanicDisorder,
    );

    assert!(plan.special_considerations.contains("Consider SNRIs that treat both conditions"));
    assert!(
        !plan
            .special_considerations
            .contains("Stabilize mood first before aggressively treating anxiety")
    );
    assert!(
        !plan
            .special_considerations
            .contains("Multidisciplinary team management essential")
    );
    assert_eq!(plan.special_considerations.len(), 4);
}

#[test]
fn seasonal_affective_disorder_selects_only_its_interventions() {
    let plan = compose(
        DepressionLabel::SeasonalAffectiveDisorder,
        BipolarLabel::Absent,
        AnxietyLabel::Absent,
    );

    assert!(
        plan.personalized_interventions
            .contains("Light therapy (10,000 lux for 30-45 min daily)")
    );
    assert!(
        !plan
            .personalized_interventions
            .contains("Initiate evidence-based psychotherapy (CBT or IPT)")
    );
    assert!(
        !plan
            .personalized_interventions
            .contains("Requires combination of antidepressant and antipsychotic")
    );
    assert_eq!(plan.personalized_interventions.len(), 4);
}

#[test]
fn single_condition_contributes_only_its_own_fragments() {
    let plan = compose(
        DepressionLabel::Absent,
        BipolarLabel::BipolarII,
        AnxietyLabel::Absent,
    );

    // Only the bipolar genetic fragment, nothing from depression or anxiety.
    assert_eq!(plan.genetic_considerations.len(), 3);
    assert!(
        plan.genetic_considerations
            .contains("Review ANK3, CACNA1C, and ODZ4 variants for calcium channel insights")
    );
    assert!(
        !plan
            .genetic_considerations
            .contains("Review 5-HTTLPR, COMT, and MAOA genotypes for serotonin metabolism insights")
    );
    assert!(
        !plan
            .genetic_considerations
            .contains("Review SLC6A4 and other serotonin transporter variants")
    );

    // No pair or triple trigger is satisfied.
    assert!(plan.special_considerations.is_empty());
}

#[test]
fn therapies_start_with_baseline_then_domain_entries() {
    let plan = compose(
        DepressionLabel::MajorDepressiveDisorder,
        BipolarLabel::BipolarI,
        AnxietyLabel::GeneralizedAnxiety,
    );

    let items: Vec<&str> = plan.therapeutic_approaches.iter().collect();
    assert_eq!(
        items[0],
        "Cognitive Behavioral Therapy (tailored to primary diagnosis)"
    );
    // Baseline (4), then bipolar, anxiety, depression entries in that order.
    assert_eq!(items[4], "Interpersonal and Social Rhythm Therapy (IPSRT)");
    assert_eq!(items[6], "Exposure-based therapies");
    assert_eq!(items[8], "Behavioral Activation");
    assert_eq!(items.len(), 10);
}

#[test]
fn monitoring_starts_with_baseline_then_domain_entries() {
    let plan = compose(
        DepressionLabel::PersistentDepressiveDisorder,
        BipolarLabel::Cyclothymia,
        AnxietyLabel::SpecificPhobia,
    );

    let items: Vec<&str> = plan.monitoring_and_followup.iter().collect();
    assert_eq!(
        items[0],
        "Regular clinical follow-up (frequency depends on severity)"
    );
    // Baseline (5), then bipolar, depression, anxiety entries in that order.
    assert_eq!(items[5], "Mood episode symptom monitoring");
    assert_eq!(items[7], "Suicide risk reassessment at each contact");
    assert_eq!(items[9], "Exposure hierarchy progress tracking");
    assert_eq!(items.len(), 11);
}

#[test]
fn anxiety_only_plan_has_no_depression_or_bipolar_monitoring() {
    let plan = compose(
        DepressionLabel::Absent,
        BipolarLabel::Absent,
        AnxietyLabel::Agoraphobia,
    );

    assert!(!plan.monitoring_and_followup.contains("PHQ-9 tracking over time"));
    assert!(!plan.monitoring_and_followup.contains("Mood episode symptom monitoring"));
    assert!(plan.monitoring_and_followup.contains("Anxiety diary review"));
    assert_eq!(plan.monitoring_and_followup.len(), 7);
}
