//! Slot building from a day's operating hours.

use crate::models::{TimeSlot, WeeklySchedule};
use crate::utils::time::{format_minutes, minute_of_day, parse_time};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Slot granularity in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Bookable slots for `weekday_name`.
///
/// Morning slots come first, then evening slots not already produced by the
/// morning window. The combined list is not re-sorted. Closed or unknown days
/// and unparseable windows yield nothing.
pub fn build_slots(weekday_name: &str, schedule: &WeeklySchedule) -> Vec<TimeSlot> {
    let Some(day) = schedule.by_name(weekday_name) else {
        warn!(weekday = weekday_name, "no schedule entry for weekday");
        return Vec::new();
    };
    if !day.open {
        return Vec::new();
    }

    let mut slots = day
        .morning()
        .map(|(start, end)| window_slots(weekday_name, start, end))
        .unwrap_or_default();

    if let Some((start, end)) = day.evening() {
        let seen: HashSet<String> = slots.iter().map(|s| s.as_str().to_string()).collect();
        slots.extend(
            window_slots(weekday_name, start, end)
                .into_iter()
                .filter(|s| !seen.contains(s.as_str())),
        );
    }

    debug!(weekday = weekday_name, count = slots.len(), "built pickup slots");
    slots
}

/// `[start, end)` in steps of [`SLOT_MINUTES`].
fn window_slots(weekday_name: &str, start: &str, end: &str) -> Vec<TimeSlot> {
    let (Some(from), Some(to)) = (parse_time(start), parse_time(end)) else {
        warn!(weekday = weekday_name, start, end, "unparseable schedule window, skipping");
        return Vec::new();
    };

    (minute_of_day(from)..minute_of_day(to))
        .step_by(SLOT_MINUTES as usize)
        .map(|m| TimeSlot::new(format_minutes(m)))
        .collect()
}
