//! Date utilities: weekday names, ISO parsing, deadline instants, labels.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Canonical schedule keys, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Parse a full weekday name ("Saturday", "monday", ...), case-insensitive.
pub fn parse_weekday_name(s: &str) -> Option<Weekday> {
    let wanted = s.trim().to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .position(|n| *n == wanted)
        .and_then(|i| Weekday::try_from(i as u8).ok())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS` or a space instead of `T`.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

const LAST_MILLI: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(t) => t,
    None => panic!("23:59:59.999 is a valid time"),
};

/// Last millisecond of `date` (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(LAST_MILLI)
}

/// Long-form label, e.g. "Saturday, October 24, 2026".
pub fn long_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
