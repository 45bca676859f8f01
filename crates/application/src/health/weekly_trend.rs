use chrono::NaiveDate;
use healthmate_core::entities::health_records;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use super::dtos::{TrendEntry, TrendMetric, TrendValues};
use crate::{calendar, AppResult};

const TREND_DAYS: u32 = 7;

pub struct WeeklyTrendUseCase;

impl WeeklyTrendUseCase {
    /// Existing records of the seven days ending `today`, oldest first.
    #[instrument(skip(db))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        metric: TrendMetric,
        today: NaiveDate,
    ) -> AppResult<Vec<TrendEntry>> {
        let (start, end) = calendar::window_ending(today, TREND_DAYS);

        let records = health_records::Entity::find()
            .filter(health_records::Column::UserId.eq(user_id))
            .filter(health_records::Column::RecordDate.between(start, end))
            .order_by_asc(health_records::Column::RecordDate)
            .all(db)
            .await?;

        Ok(records
            .into_iter()
            .map(|r| TrendEntry {
                date: r.record_date,
                values: match metric {
                    TrendMetric::Steps => TrendValues::Steps { steps: r.steps },
                    TrendMetric::Sleep => TrendValues::Sleep {
                        sleep_score: r.sleep_score,
                        sleep_duration: r.sleep_duration,
                    },
                    TrendMetric::Calories => TrendValues::Calories {
                        calories: r.active_calories,
                    },
                },
            })
            .collect())
    }
}
