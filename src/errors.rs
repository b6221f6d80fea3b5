//! Unified application error type.
//! All modules (config, core, providers, cli) return AppError so that
//! the binary can report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    // ---------------------------
    // Eligibility errors
    // ---------------------------
    #[error("Cannot confirm pickup date: {0}")]
    ValidationUnreachable(String),

    /// The validator rejected the date; the message is the validator's own.
    #[error("{0}")]
    DateRejected(String),

    #[error("Date {0} is not one of the offered pickup dates")]
    NotACandidate(String),

    #[error("Time {0} is not an available slot")]
    SlotUnavailable(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Remote collaborators
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;
