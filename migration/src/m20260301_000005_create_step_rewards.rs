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
                    .table(StepRewards::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StepRewards::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(StepRewards::UserId).integer().not_null())
                    .col(ColumnDef::new(StepRewards::RecordDate).date().not_null())
                    .col(ColumnDef::new(StepRewards::Steps).big_integer().not_null().default(0))
                    .col(ColumnDef::new(StepRewards::PointsEarned).big_integer().not_null().default(0))
                    .col(ColumnDef::new(StepRewards::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_step_rewards_user_id")
                            .from(StepRewards::Table, StepRewards::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_step_rewards_user_date")
                    .table(StepRewards::Table)
                    .col(StepRewards::UserId)
                    .col(StepRewards::RecordDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StepRewards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StepRewards {
    Table,
    Id,
    UserId,
    RecordDate,
    Steps,
    PointsEarned,
    UpdatedAt,
}
