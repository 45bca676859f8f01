use actix_web::{get, web};
use application::calendar;
use application::health::steps_ranking::StepsRankingUseCase;
use application::points::ranking::{PointsRankingUseCase, DEFAULT_RANKING_LIMIT};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use super::{response, HandlerResult};
use crate::extractors::AuthUser;

#[derive(Deserialize)]
pub struct RankingQuery {
    limit: Option<u64>,
}

#[get("/steps")]
pub async fn steps_ranking(_user: AuthUser, db: web::Data<DatabaseConnection>) -> HandlerResult {
    let ranking = StepsRankingUseCase::execute(&db, calendar::today()).await?;
    Ok(response::ok("Steps ranking loaded", ranking))
}

#[get("/points")]
pub async fn points_ranking(
    _user: AuthUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<RankingQuery>,
) -> HandlerResult {
    let limit = query.limit.unwrap_or(DEFAULT_RANKING_LIMIT);
    let ranking = PointsRankingUseCase::execute(&db, limit).await?;
    Ok(response::ok("Points ranking loaded", ranking))
}
