//! Time utilities: strict HH:MM parsing and minute-of-day formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("static HH:MM pattern")
});

/// Parse a 24-hour `HH:MM` string. Anything else ("7:00", "07:00:00", "25:00") is rejected.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !HHMM.is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t.trim()).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Render minutes since midnight as `HH:MM`.
pub fn format_minutes(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
