use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

const MAX_RANGE_DAYS: u32 = 366;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitSampleRequest {
    #[serde(default)]
    pub record_date: Option<NaiveDate>,

    /// `HH:MM` or `YYYY-MM-DD HH:MM`
    pub timestamp: String,

    #[validate(length(min = 1, max = 32, message = "metric_type must be 1-32 characters"))]
    pub metric_type: String,

    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitSampleResponse {
    pub record_date: NaiveDate,
    pub timestamp: String,
    pub metric_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleQuery {
    pub date: Option<NaiveDate>,
    pub days: Option<u32>,
    pub metric_type: Option<String>,
}

impl SampleQuery {
    /// Inclusive date range to read: the last `days` days when more than one
    /// is asked for, otherwise the single `date` (today by default).
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self.days {
            Some(days) if days > 1 => crate::calendar::window_ending(today, days.min(MAX_RANGE_DAYS)),
            _ => {
                let date = self.date.unwrap_or(today);
                (date, date)
            }
        }
    }

    pub fn metric_filter(&self) -> Option<String> {
        self.metric_type
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}
