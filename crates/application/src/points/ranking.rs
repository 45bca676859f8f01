use healthmate_core::entities::{points_balances, users};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::instrument;

use super::dtos::PointsRankingEntry;
use crate::AppResult;

pub const DEFAULT_RANKING_LIMIT: u64 = 10;
const MAX_RANKING_LIMIT: u64 = 100;

pub struct PointsRankingUseCase;

impl PointsRankingUseCase {
    /// Highest totals first; equal totals keep the order in which the
    /// balances were first created.
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, limit: u64) -> AppResult<Vec<PointsRankingEntry>> {
        let rows = points_balances::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(points_balances::Column::TotalPoints)
            .order_by_asc(points_balances::Column::Id)
            .limit(limit.clamp(1, MAX_RANKING_LIMIT))
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(balance, user)| user.map(|u| (balance, u)))
            .enumerate()
            .map(|(i, (balance, user))| PointsRankingEntry {
                rank: i + 1,
                user_id: user.id,
                username: user.username,
                total_points: balance.total_points,
            })
            .collect())
    }
}
