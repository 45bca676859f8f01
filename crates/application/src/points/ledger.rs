//! Balance + history writes. Callers own the transaction: both statements
//! run on the connection they are handed, so an accrual is only visible once
//! that transaction commits.

use chrono::NaiveDate;
use healthmate_core::entities::{points_balances, points_history};
use sea_orm::{
    sea_query::{Alias, Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};
use tracing::info;

use crate::calendar;

pub(crate) struct Accrual<'a> {
    pub user_id: i32,
    pub points: i64,
    pub source_category: &'a str,
    pub source_note: Option<String>,
    pub record_date: NaiveDate,
}

/// Adds `points` to the balance (a missing balance counts as zero), appends
/// the matching history entry and returns the new total.
pub(crate) async fn accrue<C>(conn: &C, accrual: Accrual<'_>) -> Result<i64, DbErr>
where
    C: ConnectionTrait,
{
    let now = calendar::now();

    let balance = points_balances::ActiveModel {
        user_id: Set(accrual.user_id),
        total_points: Set(accrual.points),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    // total_points = points_balances.total_points + excluded.total_points
    points_balances::Entity::insert(balance)
        .on_conflict(
            OnConflict::column(points_balances::Column::UserId)
                .value(
                    points_balances::Column::TotalPoints,
                    Expr::col((points_balances::Entity, points_balances::Column::TotalPoints))
                        .add(Expr::col((Alias::new("excluded"), points_balances::Column::TotalPoints))),
                )
                .update_column(points_balances::Column::UpdatedAt)
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    points_history::ActiveModel {
        user_id: Set(accrual.user_id),
        points: Set(accrual.points),
        source_category: Set(accrual.source_category.to_string()),
        source_note: Set(accrual.source_note),
        record_date: Set(accrual.record_date),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    let total = balance_of(conn, accrual.user_id).await?;
    info!(
        user_id = accrual.user_id,
        points = accrual.points,
        source = accrual.source_category,
        total,
        "Points accrued"
    );
    Ok(total)
}

/// Current total, zero for a user who never earned anything.
pub(crate) async fn balance_of<C>(conn: &C, user_id: i32) -> Result<i64, DbErr>
where
    C: ConnectionTrait,
{
    Ok(points_balances::Entity::find()
        .filter(points_balances::Column::UserId.eq(user_id))
        .one(conn)
        .await?
        .map(|b| b.total_points)
        .unwrap_or(0))
}
