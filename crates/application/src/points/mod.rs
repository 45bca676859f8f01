pub mod add_points;
pub mod balance;
pub mod dtos;
pub mod ledger;
pub mod ranking;
pub mod record_steps;

#[cfg(test)]
#[path = "points_test.rs"]
mod tests;
