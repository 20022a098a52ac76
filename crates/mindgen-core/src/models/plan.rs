use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Insertion-ordered list of unique recommendation strings.
///
/// Every sequence section of a [`TreatmentPlan`] is one of these: appends are
/// membership-checked, so the first contribution of an item wins its position
/// and later identical contributions are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct SectionList(Vec<String>);

impl SectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|existing| existing == item)
    }

    /// Append `item` unless an equal string is already present.
    pub fn push(&mut self, item: &str) {
        if !self.contains(item) {
            self.0.push(item.to_string());
        }
    }

    pub fn extend(&mut self, items: &[&str]) {
        for item in items {
            self.push(item);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// The composed treatment plan: one overview string plus nine ordered,
/// deduplicated recommendation sections. Built fresh per composition and
/// never mutated after the composer returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentPlan {
    pub overview: String,
    pub genetic_considerations: SectionList,
    pub diagnostic_confirmation: SectionList,
    pub personalized_interventions: SectionList,
    pub pharmacological_approach: SectionList,
    pub nutrigenomic_recommendations: SectionList,
    pub lifestyle_modifications: SectionList,
    pub therapeutic_approaches: SectionList,
    pub monitoring_and_followup: SectionList,
    pub special_considerations: SectionList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_first_occurrence_position() {
        let mut section = SectionList::new();
        section.push("a");
        section.push("b");
        section.push("a");
        section.push("c");
        let items: Vec<&str> = section.iter().collect();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn extend_is_membership_checked() {
        let mut section = SectionList::new();
        section.extend(&["x", "y"]);
        section.extend(&["y", "z"]);
        assert_eq!(section.len(), 3);
        assert!(section.contains("z"));
    }
}
