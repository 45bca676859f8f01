/// Steps needed for one point.
pub const STEPS_PER_POINT: i64 = 500;

pub const SOURCE_MANUAL: &str = "manual";
pub const SOURCE_STEPS: &str = "steps";

pub fn points_for_steps(steps: i64) -> i64 {
    steps.max(0) / STEPS_PER_POINT
}

/// Balance adjustment for a (re)reported day: only the difference against
/// what the day already earned. Can be negative when a count is corrected down.
pub fn step_points_delta(already_earned: i64, steps: i64) -> i64 {
    points_for_steps(steps) - already_earned
}
