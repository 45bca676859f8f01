use healthmate_core::entities::health_records;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::instrument;

use crate::{AppError, AppResult};

pub const DEFAULT_DAYS: u64 = 7;
const MAX_DAYS: u64 = 366;

pub struct ListHealthRecordsUseCase;

impl ListHealthRecordsUseCase {
    /// Most recent `days` records, newest first. Never-set columns carry
    /// their schema defaults.
    #[instrument(skip(db))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        days: u64,
    ) -> AppResult<Vec<health_records::Model>> {
        if days == 0 {
            return Err(AppError::Validation("days must be at least 1".to_string()));
        }

        let records = health_records::Entity::find()
            .filter(health_records::Column::UserId.eq(user_id))
            .order_by_desc(health_records::Column::RecordDate)
            .limit(days.min(MAX_DAYS))
            .all(db)
            .await?;

        Ok(records)
    }
}
