pub mod entities;
pub mod family;
pub mod health;
pub mod points;
pub mod radar;
