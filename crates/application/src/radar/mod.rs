pub mod broadcast;
pub mod dtos;

#[cfg(test)]
#[path = "radar_test.rs"]
mod tests;
