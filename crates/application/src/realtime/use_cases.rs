use chrono::NaiveDate;
use healthmate_core::entities::realtime_samples;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, instrument};
use validator::Validate;

use super::dtos::{SampleQuery, SubmitSampleRequest, SubmitSampleResponse};
use super::timestamp::{self, TIMESTAMP_FORMAT};
use crate::{calendar, AppError, AppResult};

// ============ Submit Sample Use Case ============

pub struct SubmitSampleUseCase;

impl SubmitSampleUseCase {
    /// Creates the sample or overwrites the value of the one already stored
    /// under the same (user, date, timestamp, metric) key.
    #[instrument(skip(db, req), fields(metric_type = %req.metric_type))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        req: SubmitSampleRequest,
        today: NaiveDate,
    ) -> AppResult<SubmitSampleResponse> {
        let req = SubmitSampleRequest {
            metric_type: req.metric_type.trim().to_string(),
            ..req
        };
        req.validate()?;
        if !req.value.is_finite() {
            return Err(AppError::Validation("value must be a finite number".to_string()));
        }

        let (record_date, recorded_at) = timestamp::resolve(&req.timestamp, req.record_date, today)?;

        let sample = realtime_samples::ActiveModel {
            user_id: Set(user_id),
            record_date: Set(record_date),
            recorded_at: Set(recorded_at),
            metric_type: Set(req.metric_type.clone()),
            value: Set(req.value),
            created_at: Set(calendar::now()),
            ..Default::default()
        };

        realtime_samples::Entity::insert(sample)
            .on_conflict(
                OnConflict::columns([
                    realtime_samples::Column::UserId,
                    realtime_samples::Column::RecordDate,
                    realtime_samples::Column::RecordedAt,
                    realtime_samples::Column::MetricType,
                ])
                .update_column(realtime_samples::Column::Value)
                .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        debug!(%record_date, %recorded_at, "Realtime sample stored");

        Ok(SubmitSampleResponse {
            record_date,
            timestamp: recorded_at.format(TIMESTAMP_FORMAT).to_string(),
            metric_type: req.metric_type,
        })
    }
}

// ============ List Samples Use Case ============

pub struct ListSamplesUseCase;

impl ListSamplesUseCase {
    #[instrument(skip(db, query))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        query: SampleQuery,
        today: NaiveDate,
    ) -> AppResult<Vec<realtime_samples::Model>> {
        let (start, end) = query.range(today);

        let mut select = realtime_samples::Entity::find()
            .filter(realtime_samples::Column::UserId.eq(user_id))
            .filter(realtime_samples::Column::RecordDate.between(start, end));

        if let Some(metric) = query.metric_filter() {
            select = select.filter(realtime_samples::Column::MetricType.eq(metric));
        }

        Ok(select
            .order_by_desc(realtime_samples::Column::RecordedAt)
            .order_by_asc(realtime_samples::Column::MetricType)
            .all(db)
            .await?)
    }
}
