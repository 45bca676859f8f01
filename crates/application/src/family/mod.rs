pub mod dtos;
pub mod use_cases;

pub(crate) use use_cases::link;

#[cfg(test)]
#[path = "family_test.rs"]
mod tests;
