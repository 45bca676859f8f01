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
                    .table(RadarSessions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RadarSessions::UserId).integer().not_null().primary_key())
                    .col(ColumnDef::new(RadarSessions::Code).string_len(32).not_null())
                    .col(ColumnDef::new(RadarSessions::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(RadarSessions::ExpiresAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_radar_sessions_user_id")
                            .from(RadarSessions::Table, RadarSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_radar_sessions_code")
                    .table(RadarSessions::Table)
                    .col(RadarSessions::Code)
                    .col(RadarSessions::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RadarSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RadarSessions {
    Table,
    UserId,
    Code,
    CreatedAt,
    ExpiresAt,
}
