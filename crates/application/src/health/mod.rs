pub mod dtos;
pub mod list_records;
pub mod steps_ranking;
pub mod submit_record;
pub mod today_overview;
pub mod weekly_trend;

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
