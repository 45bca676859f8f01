pub mod dtos;
pub mod timestamp;
pub mod use_cases;

#[cfg(test)]
#[path = "realtime_test.rs"]
mod tests;
