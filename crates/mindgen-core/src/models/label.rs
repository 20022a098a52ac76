use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the three independent condition domains a classifier reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Condition {
    Depression,
    Bipolar,
    Anxiety,
}

/// Depression classifier output.
///
/// `Absent` is the distinguished no-condition value; every label's wire form
/// is the exact string the upstream classifier emits (`"False"` for absence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DepressionLabel {
    #[serde(rename = "False")]
    Absent,
    #[serde(rename = "Major Depressive Disorder")]
    MajorDepressiveDisorder,
    #[serde(rename = "Persistent Depressive Disorder")]
    PersistentDepressiveDisorder,
    #[serde(rename = "Atypical Depression")]
    AtypicalDepression,
    #[serde(rename = "Psychotic Depression")]
    PsychoticDepression,
    #[serde(rename = "Seasonal Affective Disorder")]
    SeasonalAffectiveDisorder,
}

impl DepressionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "False",
            Self::MajorDepressiveDisorder => "Major Depressive Disorder",
            Self::PersistentDepressiveDisorder => "Persistent Depressive Disorder",
            Self::AtypicalDepression => "Atypical Depression",
            Self::PsychoticDepression => "Psychotic Depression",
            Self::SeasonalAffectiveDisorder => "Seasonal Affective Disorder",
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl fmt::Display for DepressionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepressionLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "False" => Ok(Self::Absent),
            "Major Depressive Disorder" => Ok(Self::MajorDepressiveDisorder),
            "Persistent Depressive Disorder" => Ok(Self::PersistentDepressiveDisorder),
            "Atypical Depression" => Ok(Self::AtypicalDepression),
            "Psychotic Depression" => Ok(Self::PsychoticDepression),
            "Seasonal Affective Disorder" => Ok(Self::SeasonalAffectiveDisorder),
            other => Err(CoreError::UnknownLabel(other.to_string())),
        }
    }
}

/// Bipolar classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BipolarLabel {
    #[serde(rename = "False")]
    Absent,
    #[serde(rename = "BD-I")]
    BipolarI,
    #[serde(rename = "BD-II")]
    BipolarII,
    #[serde(rename = "Cyclothymia")]
    Cyclothymia,
}

impl BipolarLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "False",
            Self::BipolarI => "BD-I",
            Self::BipolarII => "BD-II",
            Self::Cyclothymia => "Cyclothymia",
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl fmt::Display for BipolarLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BipolarLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "False" => Ok(Self::Absent),
            "BD-I" => Ok(Self::BipolarI),
            "BD-II" => Ok(Self::BipolarII),
            "Cyclothymia" => Ok(Self::Cyclothymia),
            other => Err(CoreError::UnknownLabel(other.to_string())),
        }
    }
}

/// Anxiety classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AnxietyLabel {
    #[serde(rename = "False")]
    Absent,
    #[serde(rename = "Generalized Anxiety Disorder")]
    GeneralizedAnxiety,
    #[serde(rename = "Panic Disorder")]
    PanicDisorder,
    #[serde(rename = "Social Anxiety Disorder")]
    SocialAnxiety,
    #[serde(rename = "Agoraphobia")]
    Agoraphobia,
    #[serde(rename = "Specific Phobia")]
    SpecificPhobia,
}

impl AnxietyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "False",
            Self::GeneralizedAnxiety => "Generalized Anxiety Disorder",
            Self::PanicDisorder => "Panic Disorder",
            Self::SocialAnxiety => "Social Anxiety Disorder",
            Self::Agoraphobia => "Agoraphobia",
            Self::SpecificPhobia => "Specific Phobia",
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl fmt::Display for AnxietyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnxietyLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "False" => Ok(Self::Absent),
            "Generalized Anxiety Disorder" => Ok(Self::GeneralizedAnxiety),
            "Panic Disorder" => Ok(Self::PanicDisorder),
            "Social Anxiety Disorder" => Ok(Self::SocialAnxiety),
            "Agoraphobia" => Ok(Self::Agoraphobia),
            "Specific Phobia" => Ok(Self::SpecificPhobia),
            other => Err(CoreError::UnknownLabel(other.to_string())),
        }
    }
}

/// Names of the detected conditions in fixed domain order
/// (Depression, Bipolar, Anxiety). Empty when all three are absent.
pub fn detected_conditions(
    dep: DepressionLabel,
    bip: BipolarLabel,
    anx: AnxietyLabel,
) -> Vec<&'static str> {
    let mut conditions = Vec::new();
    if dep.is_present() {
        conditions.push(dep.as_str());
    }
    if bip.is_present() {
        conditions.push(bip.as_str());
    }
    if anx.is_present() {
        conditions.push(anx.as_str());
    }
    conditions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_marker_parses_to_absent() {
        assert_eq!("False".parse::<DepressionLabel>().unwrap(), DepressionLabel::Absent);
        assert_eq!("False".parse::<BipolarLabel>().unwrap(), BipolarLabel::Absent);
        assert_eq!("False".parse::<AnxietyLabel>().unwrap(), AnxietyLabel::Absent);
    }

    #[test]
    fn unrecognized_label_is_an_error_not_absence() {
        let err = "Unipolar Depression".parse::<DepressionLabel>().unwrap_err();
        assert!(err.to_string().contains("Unipolar Depression"));
    }

    #[test]
    fn display_matches_classifier_strings() {
        assert_eq!(BipolarLabel::BipolarI.to_string(), "BD-I");
        assert_eq!(
            AnxietyLabel::GeneralizedAnxiety.to_string(),
            "Generalized Anxiety Disorder"
        );
    }

    #[test]
    fn serde_round_trips_the_wire_form() {
        let json = serde_json::to_string(&DepressionLabel::Absent).unwrap();
        assert_eq!(json, "\"False\"");
        let back: DepressionLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DepressionLabel::Absent);
    }

    #[test]
    fn detected_conditions_preserves_domain_order() {
        let conditions = detected_conditions(
            DepressionLabel::MajorDepressiveDisorder,
            BipolarLabel::Absent,
            AnxietyLabel::PanicDisorder,
        );
        assert_eq!(conditions, vec!["Major Depressive Disorder", "Panic Disorder"]);
    }
}
