use actix_web::{get, post, web};
use application::calendar;
use application::health::{
    dtos::{SubmitHealthRecordRequest, TrendMetric},
    list_records::{ListHealthRecordsUseCase, DEFAULT_DAYS},
    submit_record::SubmitHealthRecordUseCase,
    today_overview::TodayOverviewUseCase,
    weekly_trend::WeeklyTrendUseCase,
};
use application::AppError;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use super::{response, HandlerResult};
use crate::extractors::AuthUser;

#[derive(Deserialize)]
pub struct RecordsQuery {
    days: Option<u64>,
}

#[post("/records")]
pub async fn submit_record(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SubmitHealthRecordRequest>,
) -> HandlerResult {
    let body = body.into_inner();
    let record_date = calendar::resolve_date(body.record_date);

    let outcome = SubmitHealthRecordUseCase::execute(&db, user.user_id, record_date, body.fields).await?;
    let message = if outcome.updated_fields == 0 {
        "No health fields supplied, nothing to update"
    } else {
        "Health data saved"
    };
    Ok(response::ok(message, outcome))
}

#[get("/records")]
pub async fn list_records(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<RecordsQuery>,
) -> HandlerResult {
    let days = query.days.unwrap_or(DEFAULT_DAYS);
    let records = ListHealthRecordsUseCase::execute(&db, user.user_id, days).await?;
    Ok(response::ok("Health records loaded", records))
}

#[get("/overview")]
pub async fn today_overview(user: AuthUser, db: web::Data<DatabaseConnection>) -> HandlerResult {
    let overview = TodayOverviewUseCase::execute(&db, user.user_id, calendar::today()).await?;
    Ok(response::ok("Overview loaded", overview))
}

#[get("/trends/{metric}")]
pub async fn weekly_trend(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> HandlerResult {
    let metric: TrendMetric = path.parse().map_err(AppError::Validation)?;
    let trend = WeeklyTrendUseCase::execute(&db, user.user_id, metric, calendar::today()).await?;
    Ok(response::ok("Weekly trend loaded", trend))
}
