use chrono::NaiveDate;
use healthmate_core::entities::step_rewards;
use healthmate_core::health::HealthPatch;
use healthmate_core::points::{points_for_steps, step_points_delta, SOURCE_STEPS};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::{debug, instrument};
use validator::Validate;

use super::dtos::{RecordStepsRequest, RecordStepsResponse};
use super::ledger::{self, Accrual};
use crate::health::submit_record::merge_patch;
use crate::{calendar, AppError, AppResult};

pub struct RecordStepsUseCase;

impl RecordStepsUseCase {
    /// Reports the day's step count. Only the difference against the points
    /// this day already earned reaches the balance, and the count is mirrored
    /// into the day's health record. Everything commits together.
    #[instrument(skip(db, req), fields(steps = req.steps))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        req: RecordStepsRequest,
        today: NaiveDate,
    ) -> AppResult<RecordStepsResponse> {
        req.validate()?;
        let record_date = req.record_date.unwrap_or(today);
        let steps = req.steps;
        let now = calendar::now();

        let txn = db.begin().await?;

        // Claim the day's reward row. The no-op update takes the row lock, so
        // reports for the same user and day queue up behind each other here.
        step_rewards::Entity::insert(step_rewards::ActiveModel {
            user_id: Set(user_id),
            record_date: Set(record_date),
            steps: Set(0),
            points_earned: Set(0),
            updated_at: Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([step_rewards::Column::UserId, step_rewards::Column::RecordDate])
                .value(
                    step_rewards::Column::Steps,
                    Expr::col((step_rewards::Entity, step_rewards::Column::Steps)),
                )
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        let reward = step_rewards::Entity::find()
            .filter(step_rewards::Column::UserId.eq(user_id))
            .filter(step_rewards::Column::RecordDate.eq(record_date))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("step reward row vanished inside transaction")))?;

        let delta = step_points_delta(reward.points_earned, steps);

        let mut reward: step_rewards::ActiveModel = reward.into();
        reward.steps = Set(steps);
        reward.points_earned = Set(points_for_steps(steps));
        reward.updated_at = Set(now);
        reward.update(&txn).await?;

        let total_points = if delta != 0 {
            ledger::accrue(
                &txn,
                Accrual {
                    user_id,
                    points: delta,
                    source_category: SOURCE_STEPS,
                    source_note: Some(format!("{} steps", steps)),
                    record_date,
                },
            )
            .await?
        } else {
            debug!("Step count earned no new points");
            ledger::balance_of(&txn, user_id).await?
        };

        merge_patch(&txn, user_id, record_date, HealthPatch::steps_only(steps)).await?;

        txn.commit().await?;

        Ok(RecordStepsResponse {
            record_date,
            steps,
            points_earned_delta: delta,
            total_points,
        })
    }
}
