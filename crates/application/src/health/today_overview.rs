use chrono::NaiveDate;
use healthmate_core::entities::health_records;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::instrument;

use super::dtos::TodayOverview;
use crate::AppResult;

pub struct TodayOverviewUseCase;

impl TodayOverviewUseCase {
    /// A day without a record is not an error: it yields the default projection.
    #[instrument(skip(db))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        today: NaiveDate,
    ) -> AppResult<TodayOverview> {
        let record = health_records::Entity::find()
            .filter(health_records::Column::UserId.eq(user_id))
            .filter(health_records::Column::RecordDate.eq(today))
            .one(db)
            .await?;

        Ok(record.map(project).unwrap_or_default())
    }
}

fn project(record: health_records::Model) -> TodayOverview {
    TodayOverview {
        steps: record.steps,
        heart_rate: record.avg_heart_rate,
        sleep_score: record.sleep_score,
        active_calories: record.active_calories,
        basal_calories: record.basic_metabolism_calories,
        blood_oxygen: record.current_blood_oxygen,
        mood: record.current_mood,
    }
}
