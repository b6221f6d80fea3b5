//! User-facing terminal output. Diagnostics go through `tracing` instead.

use crate::models::{CandidateDate, TimeSlot};
use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW, color_for_deadline, colorize_slot};
use chrono::NaiveDateTime;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}{ICON_INFO} {RESET}{msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK} {RESET}{msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN} {RESET}{msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR} {RESET}{msg}");
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}=== {msg} ==={RESET}");
}

/// One line per candidate: label, ISO date and deadline coloured by whether it is still open.
pub fn candidate_line(candidate: &CandidateDate, now: NaiveDateTime) -> String {
    let color = color_for_deadline(candidate.is_orderable_at(now));
    format!(
        "{:<30} [{}]  order by {color}{}{RESET}",
        candidate.display_label,
        candidate.iso_date(),
        candidate.ordering_deadline.format("%Y-%m-%d %H:%M"),
    )
}

/// Slots laid out eight per row.
pub fn slot_rows(slots: &[TimeSlot]) -> Vec<String> {
    slots
        .chunks(8)
        .map(|row| {
            row.iter()
                .map(|s| colorize_slot(s.as_str()))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
