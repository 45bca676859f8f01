use std::collections::HashMap;

use chrono::NaiveDate;
use healthmate_core::entities::{health_records, users};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::instrument;

use super::dtos::StepsRankingEntry;
use crate::AppResult;

pub struct StepsRankingUseCase;

impl StepsRankingUseCase {
    /// Every user ranked by the given day's steps. Users without a record
    /// count as zero; ties go to the alphabetically first username.
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, date: NaiveDate) -> AppResult<Vec<StepsRankingEntry>> {
        let all_users = users::Entity::find().all(db).await?;

        let steps_by_user: HashMap<i32, i64> = health_records::Entity::find()
            .filter(health_records::Column::RecordDate.eq(date))
            .all(db)
            .await?
            .into_iter()
            .map(|r| (r.user_id, r.steps))
            .collect();

        let mut rows: Vec<(i32, String, i64)> = all_users
            .into_iter()
            .map(|u| {
                let steps = steps_by_user.get(&u.id).copied().unwrap_or(0);
                (u.id, u.username, steps)
            })
            .collect();
        rows.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)));

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, (user_id, username, steps))| StepsRankingEntry {
                rank: i + 1,
                user_id,
                username,
                steps,
            })
            .collect())
    }
}
