//! Date window generation: the next orderable occurrence of each pickup day.
//!
//! Everything here is a pure function of the `now` passed in; the clock is
//! read once by the caller and threaded through, so both pickup days are
//! always evaluated against the same instant.

use crate::errors::{AppError, AppResult};
use crate::models::{CandidateDate, PickupDay};
use crate::utils::date::end_of_day;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

/// Default lead time between ordering and pickup.
pub const LEAD_DAYS: u32 = 8;

/// Largest lead time a single one-week rollover can still satisfy: the naive
/// occurrence is at least tomorrow, so after rollover the deadline lands on
/// `tomorrow + 7 - lead_days`, which must not be earlier than today.
pub const MAX_LEAD_DAYS: u32 = 8;

/// Next date strictly after `today` falling on `weekday` (same-day is never offered).
pub fn next_occurrence(today: NaiveDate, weekday: Weekday) -> AppResult<NaiveDate> {
    let from = today.weekday().num_days_from_monday() as i64;
    let to = weekday.num_days_from_monday() as i64;
    let offset = match (to - from).rem_euclid(7) {
        0 => 7,
        n => n,
    };
    add_days(today, offset as u64)
}

/// `date - lead_days` at 23:59:59.999 local time.
pub fn ordering_deadline(date: NaiveDate, lead_days: u32) -> AppResult<NaiveDateTime> {
    date.checked_sub_days(Days::new(lead_days as u64))
        .map(end_of_day)
        .ok_or_else(|| AppError::InvalidDate(format!("{date} - {lead_days} days")))
}

pub fn check_lead_days(lead_days: u32) -> AppResult<()> {
    if lead_days == 0 || lead_days > MAX_LEAD_DAYS {
        return Err(AppError::Config(format!(
            "lead_days must be between 1 and {MAX_LEAD_DAYS}, got {lead_days}"
        )));
    }
    Ok(())
}

/// The candidate offered for one pickup day, rolled over by one week when the
/// nearest occurrence can no longer be ordered.
pub fn candidate_for(now: NaiveDateTime, day: PickupDay, lead_days: u32) -> AppResult<CandidateDate> {
    let naive = next_occurrence(now.date(), day.weekday())?;
    let deadline = ordering_deadline(naive, lead_days)?;

    if now <= deadline {
        debug!(day = %day, date = %naive, %deadline, "pickup date still open");
        return Ok(CandidateDate::new(naive, deadline));
    }

    let rolled = add_days(naive, 7)?;
    let rolled_deadline = ordering_deadline(rolled, lead_days)?;
    debug!(day = %day, from = %naive, to = %rolled, deadline = %rolled_deadline, "deadline passed, rolling over one week");

    if now > rolled_deadline {
        return Err(AppError::InvariantViolation(format!(
            "{now} is past the deadline of {rolled} even after rollover"
        )));
    }
    Ok(CandidateDate::new(rolled, rolled_deadline))
}

/// Both candidates for `now`, ascending by date.
pub fn generate_candidate_dates(
    now: NaiveDateTime,
    pickup_days: [PickupDay; 2],
    lead_days: u32,
) -> AppResult<[CandidateDate; 2]> {
    let [first_day, second_day] = pickup_days;
    if first_day == second_day {
        return Err(AppError::Config(format!(
            "pickup days must be two distinct weekdays, got {first_day} twice"
        )));
    }
    check_lead_days(lead_days)?;

    let first = candidate_for(now, first_day, lead_days)?;
    let second = candidate_for(now, second_day, lead_days)?;

    match first.calendar_date.cmp(&second.calendar_date) {
        std::cmp::Ordering::Less => Ok([first, second]),
        std::cmp::Ordering::Greater => Ok([second, first]),
        std::cmp::Ordering::Equal => Err(AppError::InvariantViolation(format!(
            "{first_day} and {second_day} both produced {}",
            first.calendar_date
        ))),
    }
}

fn add_days(date: NaiveDate, days: u64) -> AppResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| AppError::InvalidDate(format!("{date} + {days} days")))
}
