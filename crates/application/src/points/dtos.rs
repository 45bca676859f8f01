use chrono::NaiveDate;
use healthmate_core::points::SOURCE_MANUAL;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_source_category() -> String {
    SOURCE_MANUAL.to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddPointsRequest {
    /// Signed adjustment, never zero
    pub points: i64,

    #[serde(default = "default_source_category")]
    #[validate(length(min = 1, max = 32, message = "source_category must be 1-32 characters"))]
    pub source_category: String,

    #[validate(length(max = 255, message = "source_note must be at most 255 characters"))]
    pub source_note: Option<String>,

    #[serde(default)]
    pub record_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordStepsRequest {
    #[validate(range(min = 0, message = "steps cannot be negative"))]
    pub steps: i64,

    #[serde(default)]
    pub record_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordStepsResponse {
    pub record_date: NaiveDate,
    pub steps: i64,
    pub points_earned_delta: i64,
    pub total_points: i64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsRankingEntry {
    pub rank: usize,
    pub user_id: i32,
    pub username: String,
    pub total_points: i64,
}
