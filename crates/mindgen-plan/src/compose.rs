//! The plan composer: merges catalog fragments into a [`TreatmentPlan`].

use mindgen_core::models::label::{
    AnxietyLabel, BipolarLabel, DepressionLabel, detected_conditions,
};
use mindgen_core::models::plan::TreatmentPlan;

use crate::DomainRules;
use crate::catalog::anxiety::Anxiety;
use crate::catalog::bipolar::Bipolar;
use crate::catalog::combinations::COMBINATION_RULES;
use crate::catalog::depression::Depression;
use crate::catalog::{
    BASELINE_MONITORING, BASELINE_THERAPIES, OVERVIEW_PREFIX, WELLNESS_OVERVIEW,
};

/// Compose a treatment plan from the three classifier labels.
///
/// Total and deterministic: identical inputs always yield a structurally
/// identical plan. Dedup is section-scoped: an item contributed by one
/// domain suppresses an identical later contribution from another, keeping
/// its first position.
pub fn compose(dep: DepressionLabel, bip: BipolarLabel, anx: AnxietyLabel) -> TreatmentPlan {
    let mut plan = TreatmentPlan::default();

    let conditions = detected_conditions(dep, bip, anx);
    if conditions.is_empty() {
        plan.overview = WELLNESS_OVERVIEW.to_string();
        return plan;
    }
    plan.overview = format!("{OVERVIEW_PREFIX}{}", conditions.join(", "));

    // Per-domain fragments in fixed domain order.
    if dep.is_present() {
        apply_domain(&mut plan, &Depression, dep);
    }
    if bip.is_present() {
        apply_domain(&mut plan, &Bipolar, bip);
    }
    if anx.is_present() {
        apply_domain(&mut plan, &Anxiety, anx);
    }

    for rule in COMBINATION_RULES {
        if rule.applies(dep, bip, anx) {
            plan.special_considerations.extend(rule.considerations);
        }
    }

    plan.therapeutic_approaches.extend(BASELINE_THERAPIES);
    if bip.is_present() {
        plan.therapeutic_approaches.extend(Bipolar.therapies());
    }
    if anx.is_present() {
        plan.therapeutic_approaches.extend(Anxiety.therapies());
    }
    if dep.is_present() {
        plan.therapeutic_approaches.extend(Depression.therapies());
    }

    plan.monitoring_and_followup.extend(BASELINE_MONITORING);
    if bip.is_present() {
        plan.monitoring_and_followup.extend(Bipolar.monitoring());
    }
    if dep.is_present() {
        plan.monitoring_and_followup.extend(Depression.monitoring());
    }
    if anx.is_present() {
        plan.monitoring_and_followup.extend(Anxiety.monitoring());
    }

    plan
}

fn apply_domain<D: DomainRules>(plan: &mut TreatmentPlan, domain: &D, label: D::Label) {
    plan.genetic_considerations.extend(domain.genetic());
    plan.diagnostic_confirmation.extend(domain.diagnostic());
    plan.personalized_interventions
        .extend(domain.interventions(label));
    plan.pharmacological_approach.extend(domain.pharmacological());
    plan.nutrigenomic_recommendations.extend(domain.nutrigenomic());
    plan.lifestyle_modifications.extend(domain.lifestyle());
}
