/// Edge status; anything else is treated as inactive and hidden from lists.
pub const STATUS_ACTIVE: i16 = 1;

pub const DEFAULT_RELATION: &str = "family";
