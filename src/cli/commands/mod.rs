pub mod book;
pub mod config;
pub mod dates;
pub mod init;
pub mod schedule;
pub mod slots;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDateTime;

/// `--now` override, or the local clock read once.
pub(crate) fn resolve_now(now: &Option<String>) -> AppResult<NaiveDateTime> {
    match now {
        Some(s) => date::parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::now()),
    }
}
