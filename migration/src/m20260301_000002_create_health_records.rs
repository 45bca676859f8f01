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
                    .table(HealthRecords::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(HealthRecords::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(HealthRecords::UserId).integer().not_null())
                    .col(ColumnDef::new(HealthRecords::RecordDate).date().not_null())
                    .col(ColumnDef::new(HealthRecords::Steps).big_integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::StepsGoal).big_integer().not_null().default(10_000))
                    .col(ColumnDef::new(HealthRecords::Distance).double().not_null().default(0.0))
                    .col(ColumnDef::new(HealthRecords::CaloriesBurned).double().not_null().default(0.0))
                    .col(ColumnDef::new(HealthRecords::CurrentHeartRate).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::RestingHeartRate).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::MinHeartRate).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::AvgHeartRate).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::MaxHeartRate).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::CurrentBloodOxygen).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::MinBloodOxygen).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::AvgBloodOxygen).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::MaxBloodOxygen).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::SleepScore).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::SleepDuration).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::SleepStartTime).string_len(32).not_null().default(""))
                    .col(ColumnDef::new(HealthRecords::SleepEndTime).string_len(32).not_null().default(""))
                    .col(ColumnDef::new(HealthRecords::DeepSleepDuration).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::LightSleepDuration).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::RemSleepDuration).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::AwakeDuration).integer().not_null().default(0))
                    .col(ColumnDef::new(HealthRecords::ActiveCalories).double().not_null().default(0.0))
                    .col(ColumnDef::new(HealthRecords::CaloriesGoal).double().not_null().default(2_000.0))
                    .col(ColumnDef::new(HealthRecords::ActivityCalories).double().not_null().default(0.0))
                    .col(ColumnDef::new(HealthRecords::BasicMetabolismCalories).double().not_null().default(0.0))
                    // -1 = not reported
                    .col(ColumnDef::new(HealthRecords::CurrentMood).integer().not_null().default(-1))
                    .col(ColumnDef::new(HealthRecords::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_records_user_id")
                            .from(HealthRecords::Table, HealthRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One record per user per day; also the upsert conflict target
        manager
            .create_index(
                Index::create()
                    .name("idx_health_records_user_date")
                    .table(HealthRecords::Table)
                    .col(HealthRecords::UserId)
                    .col(HealthRecords::RecordDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HealthRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HealthRecords {
    Table,
    Id,
    UserId,
    RecordDate,
    Steps,
    StepsGoal,
    Distance,
    CaloriesBurned,
    CurrentHeartRate,
    RestingHeartRate,
    MinHeartRate,
    AvgHeartRate,
    MaxHeartRate,
    CurrentBloodOxygen,
    MinBloodOxygen,
    AvgBloodOxygen,
    MaxBloodOxygen,
    SleepScore,
    SleepDuration,
    SleepStartTime,
    SleepEndTime,
    DeepSleepDuration,
    LightSleepDuration,
    RemSleepDuration,
    AwakeDuration,
    ActiveCalories,
    CaloriesGoal,
    ActivityCalories,
    BasicMetabolismCalories,
    CurrentMood,
    UpdatedAt,
}
