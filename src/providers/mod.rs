//! Adapters for the external collaborators: the schedule provider and the
//! remote deadline validator.

pub mod file;
pub mod http;

use crate::config::Config;
use crate::core::deadline::{DeadlineValidator, LocalDeadlineValidator};
use crate::errors::AppResult;
use crate::models::WeeklySchedule;
use crate::utils::path::{expand_tilde, is_url};
use async_trait::async_trait;
use chrono::NaiveDateTime;

pub use file::FileScheduleProvider;
pub use http::{HttpDeadlineValidator, HttpScheduleProvider};

/// Read-only source of the weekly operating hours.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    async fn fetch(&self) -> AppResult<WeeklySchedule>;
}

/// Provider for the configured `schedule` location (file path or http(s) URL).
pub fn schedule_provider(cfg: &Config) -> AppResult<Box<dyn ScheduleProvider>> {
    if is_url(&cfg.schedule) {
        Ok(Box::new(HttpScheduleProvider::new(
            &cfg.schedule,
            cfg.http_timeout(),
        )?))
    } else {
        Ok(Box::new(FileScheduleProvider::new(expand_tilde(
            &cfg.schedule,
        ))))
    }
}

/// Remote validator when `validator_url` is set, otherwise the local rule
/// evaluated at `now`.
pub fn deadline_validator(cfg: &Config, now: NaiveDateTime) -> AppResult<Box<dyn DeadlineValidator>> {
    match &cfg.validator_url {
        Some(url) => Ok(Box::new(HttpDeadlineValidator::new(url, cfg.http_timeout())?)),
        None => Ok(Box::new(LocalDeadlineValidator::new(now, cfg.lead_days))),
    }
}
