pub mod family_members;
pub mod health_records;
pub mod points_balances;
pub mod points_history;
pub mod radar_sessions;
pub mod realtime_samples;
pub mod step_rewards;
pub mod users;
