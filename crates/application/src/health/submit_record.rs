use chrono::NaiveDate;
use healthmate_core::entities::health_records;
use healthmate_core::health::HealthPatch;
use sea_orm::{sea_query::OnConflict, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait};
use tracing::{debug, instrument};

use super::dtos::SubmitHealthRecordResponse;
use crate::{calendar, AppError, AppResult};

pub struct SubmitHealthRecordUseCase;

impl SubmitHealthRecordUseCase {
    #[instrument(skip(db, patch))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        record_date: NaiveDate,
        patch: HealthPatch,
    ) -> AppResult<SubmitHealthRecordResponse> {
        if let Some(field) = patch.negative_field() {
            return Err(AppError::Validation(format!("{} cannot be negative", field)));
        }

        let updated_fields = merge_patch(db, user_id, record_date, patch).await?;

        Ok(SubmitHealthRecordResponse {
            record_date,
            updated_fields,
        })
    }
}

/// Field-level upsert of one day's record. A single
/// `INSERT .. ON CONFLICT (user_id, record_date) DO UPDATE` statement that
/// only assigns the supplied columns, so concurrent merges of different
/// fields never overwrite each other. Returns the number of metrics written.
pub(crate) async fn merge_patch<C>(
    conn: &C,
    user_id: i32,
    record_date: NaiveDate,
    patch: HealthPatch,
) -> Result<usize, DbErr>
where
    C: ConnectionTrait,
{
    let (model, columns) = patch.into_upsert(user_id, record_date, calendar::now());
    if columns.is_empty() {
        debug!("Empty health submission, nothing to merge");
        return Ok(0);
    }
    // updated_at is always part of the column list
    let merged = columns.len() - 1;

    health_records::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([
                health_records::Column::UserId,
                health_records::Column::RecordDate,
            ])
            .update_columns(columns)
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    debug!(merged, "Health record merged");
    Ok(merged)
}
