use healthmate_core::entities::points_history;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::instrument;

use super::dtos::BalanceResponse;
use super::ledger;
use crate::AppResult;

pub const DEFAULT_HISTORY_LIMIT: u64 = 20;
const MAX_HISTORY_LIMIT: u64 = 100;

pub struct GetBalanceUseCase;

impl GetBalanceUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: i32) -> AppResult<BalanceResponse> {
        Ok(BalanceResponse {
            total_points: ledger::balance_of(db, user_id).await?,
        })
    }
}

pub struct GetHistoryUseCase;

impl GetHistoryUseCase {
    /// Newest entries first. Read-only view of the audit trail.
    #[instrument(skip(db))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        limit: u64,
    ) -> AppResult<Vec<points_history::Model>> {
        Ok(points_history::Entity::find()
            .filter(points_history::Column::UserId.eq(user_id))
            .order_by_desc(points_history::Column::CreatedAt)
            .order_by_desc(points_history::Column::Id)
            .limit(limit.clamp(1, MAX_HISTORY_LIMIT))
            .all(db)
            .await?)
    }
}
