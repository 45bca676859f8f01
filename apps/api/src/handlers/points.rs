use actix_web::{get, post, web};
use application::calendar;
use application::points::{
    add_points::AddPointsUseCase,
    balance::{GetBalanceUseCase, GetHistoryUseCase, DEFAULT_HISTORY_LIMIT},
    dtos::{AddPointsRequest, RecordStepsRequest},
    record_steps::RecordStepsUseCase,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use super::{response, HandlerResult};
use crate::extractors::AuthUser;

#[derive(Deserialize)]
pub struct HistoryQuery {
    limit: Option<u64>,
}

#[post("/steps")]
pub async fn record_steps(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<RecordStepsRequest>,
) -> HandlerResult {
    let reward = RecordStepsUseCase::execute(&db, user.user_id, body.into_inner(), calendar::today()).await?;
    Ok(response::ok("Steps recorded", reward))
}

#[post("")]
pub async fn add_points(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<AddPointsRequest>,
) -> HandlerResult {
    let totals = AddPointsUseCase::execute(&db, user.user_id, body.into_inner(), calendar::today()).await?;
    Ok(response::ok("Points added", totals))
}

#[get("/balance")]
pub async fn balance(user: AuthUser, db: web::Data<DatabaseConnection>) -> HandlerResult {
    let totals = GetBalanceUseCase::execute(&db, user.user_id).await?;
    Ok(response::ok("Points balance loaded", totals))
}

#[get("/history")]
pub async fn history(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<HistoryQuery>,
) -> HandlerResult {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let entries = GetHistoryUseCase::execute(&db, user.user_id, limit).await?;
    Ok(response::ok("Points history loaded", entries))
}
