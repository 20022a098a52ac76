use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::label::{AnxietyLabel, BipolarLabel, DepressionLabel};

/// A persisted report: the three classifier labels plus the formatted text
/// document, owned by the user it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportRecord {
    pub id: Uuid,
    pub username: String,
    pub created_at: jiff::Timestamp,
    pub depression: DepressionLabel,
    pub bipolar: BipolarLabel,
    pub anxiety: AnxietyLabel,
    pub report: String,
}

impl ReportRecord {
    pub fn new(
        username: impl Into<String>,
        depression: DepressionLabel,
        bipolar: BipolarLabel,
        anxiety: AnxietyLabel,
        report: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            created_at: jiff::Timestamp::now(),
            depression,
            bipolar,
            anxiety,
            report: report.into(),
        }
    }
}
