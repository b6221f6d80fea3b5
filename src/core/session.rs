//! Drives a [`Coordinator`] against the real collaborators.

use crate::core::coordinator::{Applied, Coordinator};
use crate::core::deadline::DeadlineValidator;
use crate::errors::{AppError, AppResult};
use crate::models::{SelectedPickup, TimeSlot};
use crate::providers::ScheduleProvider;
use chrono::NaiveDate;
use tracing::warn;

/// Result of a booking attempt that got past date validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Booking {
    /// A time was requested and is available.
    Chosen(SelectedPickup),
    /// No time requested yet; these are the choices (possibly none).
    SlotsAvailable(Vec<TimeSlot>),
}

/// Select `date`, then fetch the schedule and validate the date concurrently.
///
/// Returns the validation result as applied by the coordinator. A schedule
/// fetch failure is only an error once the date has been validated; a
/// rejected or unconfirmed date needs no schedule and reports its own message.
pub async fn select_and_validate(
    coordinator: &mut Coordinator,
    date: NaiveDate,
    schedule: &dyn ScheduleProvider,
    validator: &dyn DeadlineValidator,
) -> AppResult<Applied> {
    let pending = coordinator.select_date(date)?;

    let (fetched, validation) = tokio::join!(schedule.fetch(), validator.validate(pending));

    let applied = coordinator.apply_validation(pending, validation);
    match fetched {
        Ok(week) => coordinator.apply_schedule(week),
        Err(e) => {
            warn!(error = %e, "schedule fetch failed");
            if applied == Applied::Validated {
                return Err(e);
            }
        }
    }
    Ok(applied)
}

/// Full booking flow for one date and an optional time.
pub async fn book(
    coordinator: &mut Coordinator,
    date: NaiveDate,
    time: Option<&str>,
    schedule: &dyn ScheduleProvider,
    validator: &dyn DeadlineValidator,
) -> AppResult<Booking> {
    match select_and_validate(coordinator, date, schedule, validator).await? {
        Applied::Validated => {}
        Applied::Rejected(message) => return Err(AppError::DateRejected(message)),
        Applied::Unreachable(message) => return Err(AppError::ValidationUnreachable(message)),
        Applied::Stale => {
            return Err(AppError::InvariantViolation(format!(
                "validation for {date} arrived after the selection changed"
            )));
        }
    }

    match time {
        Some(t) => Ok(Booking::Chosen(coordinator.choose_time(t)?.clone())),
        None => Ok(Booking::SlotsAvailable(coordinator.slots().to_vec())),
    }
}
