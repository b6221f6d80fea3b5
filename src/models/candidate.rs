use crate::utils::date::{long_label, weekday_name};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A pickup date offered to the customer, with its advisory ordering deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDate {
    pub calendar_date: NaiveDate,
    pub display_label: String,
    pub weekday_name: String,
    /// Local wall-clock instant after which the date is no longer orderable.
    pub ordering_deadline: NaiveDateTime,
}

impl CandidateDate {
    pub fn new(calendar_date: NaiveDate, ordering_deadline: NaiveDateTime) -> Self {
        Self {
            calendar_date,
            display_label: long_label(calendar_date),
            weekday_name: weekday_name(calendar_date.weekday()).to_string(),
            ordering_deadline,
        }
    }

    pub fn iso_date(&self) -> String {
        self.calendar_date.format("%Y-%m-%d").to_string()
    }

    pub fn is_orderable_at(&self, now: NaiveDateTime) -> bool {
        now <= self.ordering_deadline
    }
}
