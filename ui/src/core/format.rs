//! Formatting helpers for presenting dates.

use time::OffsetDateTime;

/// Coarse distance between `now` and `target`, e.g. `3 months`. Direction is
/// ignored; callers add "in"/"ago" themselves. Anything under a day rounds up
/// to `1 day`.
pub fn format_relative(now: OffsetDateTime, target: OffsetDateTime) -> String {
    let days = (target - now).whole_days().unsigned_abs();

    if days < 30 {
        plural(days.max(1), "day")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
