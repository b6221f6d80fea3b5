use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_weekday_name, weekday_name};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two weekdays on which pickup is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PickupDay(Weekday);

impl PickupDay {
    pub fn new(day: Weekday) -> Self {
        PickupDay(day)
    }

    pub fn weekday(&self) -> Weekday {
        self.0
    }

    /// Lowercase name, as used for schedule lookup.
    pub fn name(&self) -> &'static str {
        weekday_name(self.0)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        parse_weekday_name(s)
            .map(PickupDay)
            .ok_or_else(|| AppError::InvalidWeekday(s.to_string()))
    }
}

impl TryFrom<String> for PickupDay {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PickupDay::parse(&value)
    }
}

impl From<PickupDay> for String {
    fn from(day: PickupDay) -> Self {
        day.name().to_string()
    }
}

impl fmt::Display for PickupDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
