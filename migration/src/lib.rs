pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users;
mod m20260301_000002_create_health_records;
mod m20260301_000003_create_realtime_samples;
mod m20260301_000004_create_points;
mod m20260301_000005_create_step_rewards;
mod m20260301_000006_create_family_members;
mod m20260301_000007_create_radar_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users::Migration),
            Box::new(m20260301_000002_create_health_records::Migration),
            Box::new(m20260301_000003_create_realtime_samples::Migration),
            Box::new(m20260301_000004_create_points::Migration),
            Box::new(m20260301_000005_create_step_rewards::Migration),
            Box::new(m20260301_000006_create_family_members::Migration),
            Box::new(m20260301_000007_create_radar_sessions::Migration),
        ]
    }
}
