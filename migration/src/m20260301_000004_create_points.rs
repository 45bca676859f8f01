use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PointsBalances::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PointsBalances::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(PointsBalances::UserId).integer().not_null().unique_key())
                    .col(ColumnDef::new(PointsBalances::TotalPoints).big_integer().not_null().default(0))
                    .col(ColumnDef::new(PointsBalances::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(PointsBalances::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_points_balances_user_id")
                            .from(PointsBalances::Table, PointsBalances::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PointsHistory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PointsHistory::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(PointsHistory::UserId).integer().not_null())
                    .col(ColumnDef::new(PointsHistory::Points).big_integer().not_null())
                    .col(
                        ColumnDef::new(PointsHistory::SourceCategory)
                            .string_len(32)
                            .not_null()
                            .comment("manual, steps, ..."),
                    )
                    .col(ColumnDef::new(PointsHistory::SourceNote).text())
                    .col(ColumnDef::new(PointsHistory::RecordDate).date().not_null())
                    .col(ColumnDef::new(PointsHistory::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_points_history_user_id")
                            .from(PointsHistory::Table, PointsHistory::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_history_user")
                    .table(PointsHistory::Table)
                    .col(PointsHistory::UserId)
                    .col(PointsHistory::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointsHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PointsBalances::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PointsBalances {
    Table,
    Id,
    UserId,
    TotalPoints,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PointsHistory {
    Table,
    Id,
    UserId,
    Points,
    SourceCategory,
    SourceNote,
    RecordDate,
    CreatedAt,
}
