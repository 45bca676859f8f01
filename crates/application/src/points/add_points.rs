use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::instrument;
use validator::Validate;

use super::dtos::{AddPointsRequest, BalanceResponse};
use super::ledger::{self, Accrual};
use crate::{AppError, AppResult};

pub struct AddPointsUseCase;

impl AddPointsUseCase {
    #[instrument(skip(db, req), fields(points = req.points, source = %req.source_category))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        req: AddPointsRequest,
        today: NaiveDate,
    ) -> AppResult<BalanceResponse> {
        let req = AddPointsRequest {
            source_category: req.source_category.trim().to_string(),
            source_note: req.source_note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            ..req
        };
        req.validate()?;
        if req.points == 0 {
            return Err(AppError::Validation("points must not be zero".to_string()));
        }

        let txn = db.begin().await?;
        let total_points = ledger::accrue(
            &txn,
            Accrual {
                user_id,
                points: req.points,
                source_category: &req.source_category,
                source_note: req.source_note,
                record_date: req.record_date.unwrap_or(today),
            },
        )
        .await?;
        txn.commit().await?;

        Ok(BalanceResponse { total_points })
    }
}
