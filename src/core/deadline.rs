//! Deadline reconciliation.
//!
//! The deadline computed by the date window is only a hint for display; the
//! answer of a [`DeadlineValidator`] is what decides whether a date can be
//! booked.

use crate::core::window::ordering_deadline;
use crate::errors::{AppError, AppResult};
use crate::utils::date::long_label;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;

/// Message returned for a date whose ordering deadline has passed.
pub const ORDERING_CLOSED: &str = "Ordering closed for this date";

/// Authoritative answer for one pickup date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub ordering_deadline: Option<DateTime<FixedOffset>>,
    pub message: String,
}

impl ValidationOutcome {
    pub fn accepted(deadline: DateTime<FixedOffset>, message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            ordering_deadline: Some(deadline),
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            ordering_deadline: None,
            message: message.into(),
        }
    }
}

/// Source of truth for "can this date still be ordered?".
///
/// Implementations must report transport or decoding problems as
/// [`AppError::ValidationUnreachable`], never as an accepted outcome.
#[async_trait]
pub trait DeadlineValidator: Send + Sync {
    async fn validate(&self, date: NaiveDate) -> AppResult<ValidationOutcome>;
}

/// Validates against the same deadline rule the date window uses, with a
/// fixed `now`. Used when no remote validator is configured.
#[derive(Debug, Clone)]
pub struct LocalDeadlineValidator {
    now: NaiveDateTime,
    lead_days: u32,
}

impl LocalDeadlineValidator {
    pub fn new(now: NaiveDateTime, lead_days: u32) -> Self {
        Self { now, lead_days }
    }

    pub fn check(&self, date: NaiveDate) -> AppResult<ValidationOutcome> {
        if date <= self.now.date() {
            return Ok(ValidationOutcome::rejected(ORDERING_CLOSED));
        }

        let deadline = ordering_deadline(date, self.lead_days)?;
        if self.now > deadline {
            return Ok(ValidationOutcome::rejected(ORDERING_CLOSED));
        }

        let instant = Local
            .from_local_datetime(&deadline)
            .earliest()
            .ok_or_else(|| {
                AppError::ValidationUnreachable(format!("deadline {deadline} does not exist locally"))
            })?;

        Ok(ValidationOutcome::accepted(
            instant.fixed_offset(),
            format!(
                "Orders for {} are accepted until {}",
                long_label(date),
                deadline.format("%Y-%m-%d %H:%M")
            ),
        ))
    }
}

#[async_trait]
impl DeadlineValidator for LocalDeadlineValidator {
    async fn validate(&self, date: NaiveDate) -> AppResult<ValidationOutcome> {
        self.check(date)
    }
}
