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
                    .table(RealtimeSamples::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RealtimeSamples::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(RealtimeSamples::UserId).integer().not_null())
                    .col(ColumnDef::new(RealtimeSamples::RecordDate).date().not_null())
                    .col(ColumnDef::new(RealtimeSamples::RecordedAt).date_time().not_null())
                    .col(ColumnDef::new(RealtimeSamples::MetricType).string_len(32).not_null())
                    .col(ColumnDef::new(RealtimeSamples::Value).double().not_null())
                    .col(ColumnDef::new(RealtimeSamples::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_realtime_samples_user_id")
                            .from(RealtimeSamples::Table, RealtimeSamples::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_realtime_samples_key")
                    .table(RealtimeSamples::Table)
                    .col(RealtimeSamples::UserId)
                    .col(RealtimeSamples::RecordDate)
                    .col(RealtimeSamples::RecordedAt)
                    .col(RealtimeSamples::MetricType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RealtimeSamples::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RealtimeSamples {
    Table,
    Id,
    UserId,
    RecordDate,
    RecordedAt,
    MetricType,
    Value,
    CreatedAt,
}
