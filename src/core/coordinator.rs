//! Eligibility coordinator: sequences date selection, remote validation and
//! slot selection for one booking session.
//!
//! ```text
//! NoDate ──select──▶ DateSelected ──valid──▶ DateValidated ──time──▶ PickupChosen
//!    ▲                    │
//!    └──rejected/failed───┘        (select from any state ─▶ DateSelected)
//! ```
//!
//! The coordinator never performs I/O. Callers feed it validation results and
//! schedules as they arrive; responses for a date that is no longer selected
//! are dropped.

use crate::core::deadline::ValidationOutcome;
use crate::core::slots::build_slots;
use crate::errors::{AppError, AppResult};
use crate::models::{CandidateDate, SelectedPickup, TimeSlot, WeeklySchedule};
use chrono::NaiveDate;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    NoDate,
    /// Waiting for the validator.
    DateSelected(CandidateDate),
    DateValidated(CandidateDate),
    PickupChosen {
        date: CandidateDate,
        pickup: SelectedPickup,
    },
}

impl FlowState {
    fn date(&self) -> Option<&CandidateDate> {
        match self {
            FlowState::NoDate => None,
            FlowState::DateSelected(d) | FlowState::DateValidated(d) => Some(d),
            FlowState::PickupChosen { date, .. } => Some(date),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FlowState::NoDate => "NoDate",
            FlowState::DateSelected(_) => "DateSelected",
            FlowState::DateValidated(_) => "DateValidated",
            FlowState::PickupChosen { .. } => "PickupChosen",
        }
    }
}

/// What happened to a validation response handed to [`Coordinator::apply_validation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Validated,
    /// The validator refused the date; carries its message verbatim.
    Rejected(String),
    /// No usable answer; the date could not be confirmed.
    Unreachable(String),
    /// The response was for a date that is no longer pending.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Coordinator {
    candidates: [CandidateDate; 2],
    state: FlowState,
    schedule: Option<WeeklySchedule>,
    slots: Vec<TimeSlot>,
    message: Option<String>,
}

impl Coordinator {
    pub fn new(candidates: [CandidateDate; 2]) -> Self {
        Self {
            candidates,
            state: FlowState::NoDate,
            schedule: None,
            slots: Vec::new(),
            message: None,
        }
    }

    pub fn candidates(&self) -> &[CandidateDate; 2] {
        &self.candidates
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Last user-facing message (validator rejection or failure).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Pick one of the offered dates. Any previous date, validation and time
    /// choice is discarded. Returns the date the caller must now validate.
    pub fn select_date(&mut self, date: NaiveDate) -> AppResult<NaiveDate> {
        let candidate = self
            .candidates
            .iter()
            .find(|c| c.calendar_date == date)
            .cloned()
            .ok_or_else(|| AppError::NotACandidate(date.to_string()))?;

        self.transition(FlowState::DateSelected(candidate));
        self.message = None;
        Ok(date)
    }

    /// Apply the validator's answer for `date`.
    pub fn apply_validation(
        &mut self,
        date: NaiveDate,
        result: AppResult<ValidationOutcome>,
    ) -> Applied {
        let pending = match &self.state {
            FlowState::DateSelected(c) if c.calendar_date == date => c.clone(),
            other => {
                warn!(%date, state = other.name(), "discarding stale validation response");
                return Applied::Stale;
            }
        };

        match result {
            Ok(outcome) if outcome.is_valid => {
                self.transition(FlowState::DateValidated(pending));
                Applied::Validated
            }
            Ok(outcome) => {
                warn!(%date, message = %outcome.message, "pickup date rejected");
                self.message = Some(outcome.message.clone());
                self.transition(FlowState::NoDate);
                Applied::Rejected(outcome.message)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(%date, error = %message, "pickup date could not be confirmed");
                self.message = Some(message.clone());
                self.transition(FlowState::NoDate);
                Applied::Unreachable(message)
            }
        }
    }

    /// Supply (or replace) the weekly schedule.
    pub fn apply_schedule(&mut self, schedule: WeeklySchedule) {
        self.schedule = Some(schedule);
        self.evaluate();
    }

    /// True once the active date is validated and a schedule is loaded.
    pub fn slots_ready(&self) -> bool {
        self.schedule.is_some()
            && matches!(
                self.state,
                FlowState::DateValidated(_) | FlowState::PickupChosen { .. }
            )
    }

    /// Slots for the validated date; empty until [`slots_ready`](Self::slots_ready).
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn choose_time(&mut self, time: &str) -> AppResult<&SelectedPickup> {
        let date = match &self.state {
            FlowState::DateValidated(d) | FlowState::PickupChosen { date: d, .. } => d.clone(),
            other => {
                return Err(AppError::InvalidTransition(format!(
                    "cannot choose a time in state {}",
                    other.name()
                )));
            }
        };
        if self.schedule.is_none() {
            return Err(AppError::InvalidTransition(
                "schedule has not been loaded yet".to_string(),
            ));
        }
        if !self.slots.iter().any(|s| s.as_str() == time) {
            return Err(AppError::SlotUnavailable(time.to_string()));
        }

        let pickup = SelectedPickup {
            date: date.iso_date(),
            display_date: date.display_label.clone(),
            time: time.to_string(),
        };
        self.transition(FlowState::PickupChosen { date, pickup });

        match &self.state {
            FlowState::PickupChosen { pickup, .. } => Ok(pickup),
            _ => Err(AppError::InvariantViolation(
                "pickup vanished after being chosen".to_string(),
            )),
        }
    }

    pub fn selected_pickup(&self) -> Option<&SelectedPickup> {
        match &self.state {
            FlowState::PickupChosen { pickup, .. } => Some(pickup),
            _ => None,
        }
    }

    fn transition(&mut self, next: FlowState) {
        info!(
            from = self.state.name(),
            to = next.name(),
            date = ?next.date().map(|d| d.calendar_date),
            "pickup flow transition"
        );
        self.state = next;
        self.evaluate();
    }

    // Recompute slots; only called when the state or schedule changes.
    fn evaluate(&mut self) {
        self.slots = match (&self.state, &self.schedule) {
            (FlowState::DateValidated(d), Some(schedule))
            | (FlowState::PickupChosen { date: d, .. }, Some(schedule)) => {
                build_slots(&d.weekday_name, schedule)
            }
            _ => Vec::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::window::generate_candidate_dates;
    use crate::models::{DaySchedule, PickupDay};
    use chrono::{DateTime, Weekday};

    fn coordinator() -> Coordinator {
        let now = NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let days = [PickupDay::new(Weekday::Sat), PickupDay::new(Weekday::Mon)];
        Coordinator::new(generate_candidate_dates(now, days, 8).unwrap())
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 24).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 26).unwrap()
    }

    fn schedule() -> WeeklySchedule {
        WeeklySchedule::from_fn(|d| match d {
            Weekday::Sat => DaySchedule {
                open: true,
                morning_start: Some("09:00".into()),
                morning_end: Some("10:00".into()),
                ..Default::default()
            },
            Weekday::Mon => DaySchedule {
                open: true,
                morning_start: Some("07:00".into()),
                morning_end: Some("09:00".into()),
                ..Default::default()
            },
            _ => DaySchedule::closed(),
        })
    }

    fn ok() -> AppResult<ValidationOutcome> {
        Ok(ValidationOutcome::accepted(
            DateTime::parse_from_rfc3339("2026-10-16T23:59:59.999+00:00").unwrap(),
            "ok",
        ))
    }

    #[test]
    fn happy_path_reaches_pickup_chosen() {
        let mut c = coordinator();
        assert_eq!(c.state(), &FlowState::NoDate);

        let pending = c.select_date(saturday()).unwrap();
        assert!(matches!(c.state(), FlowState::DateSelected(_)));
        c.apply_schedule(schedule());
        assert!(!c.slots_ready());
        assert!(c.slots().is_empty());

        assert_eq!(c.apply_validation(pending, ok()), Applied::Validated);
        assert!(c.slots_ready());
        let slots: Vec<&str> = c.slots().iter().map(TimeSlot::as_str).collect();
        assert_eq!(slots, ["09:00", "09:30"]);

        let pickup = c.choose_time("09:30").unwrap().clone();
        assert_eq!(
            pickup,
            SelectedPickup {
                date: "2026-10-24".into(),
                display_date: "Saturday, October 24, 2026".into(),
                time: "09:30".into(),
            }
        );
        assert_eq!(c.selected_pickup(), Some(&pickup));
    }

    #[test]
    fn rejection_returns_to_no_date_with_verbatim_message() {
        let mut c = coordinator();
        let pending = c.select_date(saturday()).unwrap();
        let applied = c.apply_validation(
            pending,
            Ok(ValidationOutcome::rejected("Ordering closed for this date")),
        );
        assert_eq!(applied, Applied::Rejected("Ordering closed for this date".into()));
        assert_eq!(c.state(), &FlowState::NoDate);
        assert_eq!(c.message(), Some("Ordering closed for this date"));
    }

    #[test]
    fn validator_failure_is_never_approval() {
        let mut c = coordinator();
        c.apply_schedule(schedule());
        let pending = c.select_date(monday()).unwrap();
        let applied = c.apply_validation(
            pending,
            Err(AppError::ValidationUnreachable("connection refused".into())),
        );
        assert!(matches!(applied, Applied::Unreachable(_)));
        assert_eq!(c.state(), &FlowState::NoDate);
        assert!(!c.slots_ready());
        assert!(matches!(
            c.choose_time("07:00"),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn stale_response_for_abandoned_date_is_discarded() {
        let mut c = coordinator();
        let first = c.select_date(saturday()).unwrap();
        let second = c.select_date(monday()).unwrap();

        assert_eq!(c.apply_validation(first, ok()), Applied::Stale);
        match c.state() {
            FlowState::DateSelected(d) => assert_eq!(d.calendar_date, monday()),
            other => panic!("unexpected state {other:?}"),
        }

        assert_eq!(c.apply_validation(second, ok()), Applied::Validated);
        // a late duplicate no longer has a pending date to land on
        assert_eq!(
            c.apply_validation(second, Ok(ValidationOutcome::rejected("late"))),
            Applied::Stale
        );
        assert!(matches!(c.state(), FlowState::DateValidated(_)));
    }

    #[test]
    fn changing_date_discards_chosen_time() {
        let mut c = coordinator();
        c.apply_schedule(schedule());
        let d = c.select_date(saturday()).unwrap();
        c.apply_validation(d, ok());
        c.choose_time("09:00").unwrap();

        c.select_date(monday()).unwrap();
        assert!(matches!(c.state(), FlowState::DateSelected(_)));
        assert_eq!(c.selected_pickup(), None);
        assert!(c.slots().is_empty());

        // re-selecting the same date from DateValidated also re-validates
        let d = c.select_date(saturday()).unwrap();
        c.apply_validation(d, ok());
        c.select_date(saturday()).unwrap();
        assert!(matches!(c.state(), FlowState::DateSelected(_)));
    }

    #[test]
    fn dates_outside_the_window_are_refused() {
        let mut c = coordinator();
        let err = c
            .select_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::NotACandidate(_)));
        assert_eq!(c.state(), &FlowState::NoDate);
    }

    #[test]
    fn time_must_be_one_of_the_built_slots() {
        let mut c = coordinator();
        let d = c.select_date(monday()).unwrap();
        c.apply_validation(d, ok());
        assert!(matches!(
            c.choose_time("07:00"),
            Err(AppError::InvalidTransition(_))
        ));

        c.apply_schedule(schedule());
        assert!(matches!(
            c.choose_time("09:00"),
            Err(AppError::SlotUnavailable(_))
        ));
        assert_eq!(c.choose_time("08:30").unwrap().time, "08:30");
    }
}
