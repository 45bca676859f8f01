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
                    .table(FamilyMembers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FamilyMembers::UserId).integer().not_null())
                    .col(ColumnDef::new(FamilyMembers::MemberId).integer().not_null())
                    .col(ColumnDef::new(FamilyMembers::Relation).string_len(20).not_null())
                    .col(
                        ColumnDef::new(FamilyMembers::Status)
                            .small_integer()
                            .not_null()
                            .default(1)
                            .comment("0=Inactive, 1=Active"),
                    )
                    .col(ColumnDef::new(FamilyMembers::CreatedAt).timestamp_with_time_zone().not_null())
                    .primary_key(
                        Index::create()
                            .col(FamilyMembers::UserId)
                            .col(FamilyMembers::MemberId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_family_members_user_id")
                            .from(FamilyMembers::Table, FamilyMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_family_members_member_id")
                            .from(FamilyMembers::Table, FamilyMembers::MemberId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_family_members_status")
                    .table(FamilyMembers::Table)
                    .col(FamilyMembers::UserId)
                    .col(FamilyMembers::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FamilyMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FamilyMembers {
    Table,
    UserId,
    MemberId,
    Relation,
    Status,
    CreatedAt,
}
