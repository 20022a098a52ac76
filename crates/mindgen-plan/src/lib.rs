//! mindgen-plan
//!
//! The treatment-plan composition engine. Pure data plus pure logic, no I/O.
//! The rule catalog defines condition-specific and combination-specific
//! recommendation fragments; the composer merges them into a deduplicated,
//! strictly ordered [`TreatmentPlan`](mindgen_core::models::plan::TreatmentPlan).

pub mod catalog;
pub mod compose;

use mindgen_core::models::label::Condition;

pub use compose::compose;

/// Trait implemented by each condition domain's rule set.
///
/// The five unconditional fragments apply whenever the domain's label is
/// present, independent of subtype; `interventions` resolves the single
/// subtype-keyed fragment by exhaustive match over the domain's label enum.
pub trait DomainRules {
    /// The domain's classifier label type.
    type Label: Copy;

    /// Which of the three condition domains this rule set belongs to.
    fn condition(&self) -> Condition;

    fn genetic(&self) -> &'static [&'static str];

    fn diagnostic(&self) -> &'static [&'static str];

    fn pharmacological(&self) -> &'static [&'static str];

    fn nutrigenomic(&self) -> &'static [&'static str];

    fn lifestyle(&self) -> &'static [&'static str];

    /// Subtype-specific interventions. The absence label yields no items.
    fn interventions(&self, label: Self::Label) -> &'static [&'static str];

    /// This domain's additions to the therapeutic approaches section.
    fn therapies(&self) -> &'static [&'static str];

    /// This domain's additions to the monitoring and follow-up section.
    fn monitoring(&self) -> &'static [&'static str];
}
