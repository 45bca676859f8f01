use std::str::FromStr;

use chrono::NaiveDate;
use healthmate_core::health::{HealthPatch, MOOD_UNSET};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitHealthRecordRequest {
    /// Defaults to today when omitted
    #[serde(default)]
    pub record_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub fields: HealthPatch,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitHealthRecordResponse {
    pub record_date: NaiveDate,
    pub updated_fields: usize,
}

/// Fixed projection of a day's record shown on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayOverview {
    pub steps: i64,
    pub heart_rate: i32,
    pub sleep_score: i32,
    pub active_calories: f64,
    pub basal_calories: f64,
    pub blood_oxygen: i32,
    pub mood: i32,
}

impl Default for TodayOverview {
    fn default() -> Self {
        Self {
            steps: 0,
            heart_rate: 0,
            sleep_score: 0,
            active_calories: 0.0,
            basal_calories: 0.0,
            blood_oxygen: 0,
            mood: MOOD_UNSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMetric {
    Steps,
    Sleep,
    Calories,
}

impl FromStr for TrendMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steps" => Ok(TrendMetric::Steps),
            "sleep" => Ok(TrendMetric::Sleep),
            "calories" => Ok(TrendMetric::Calories),
            other => Err(format!("Unknown trend metric '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: TrendValues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrendValues {
    Steps { steps: i64 },
    Sleep { sleep_score: i32, sleep_duration: i32 },
    Calories { calories: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsRankingEntry {
    pub rank: usize,
    pub user_id: i32,
    pub username: String,
    pub steps: i64,
}
