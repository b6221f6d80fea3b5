//! Weekly operating hours as supplied by the schedule provider.

use crate::errors::AppError;
use crate::utils::date::{WEEKDAY_NAMES, weekday_name};
use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Operating hours of a single weekday. Times are raw `HH:MM` strings;
/// they are only interpreted when slots are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    #[serde(default)]
    pub open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening_end: Option<String>,
}

impl DaySchedule {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn morning(&self) -> Option<(&str, &str)> {
        window(&self.morning_start, &self.morning_end)
    }

    pub fn evening(&self) -> Option<(&str, &str)> {
        window(&self.evening_start, &self.evening_end)
    }
}

// Empty strings count as "not set".
fn window<'a>(start: &'a Option<String>, end: &'a Option<String>) -> Option<(&'a str, &'a str)> {
    let start = start.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    let end = end.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    Some((start, end))
}

/// A full week of [`DaySchedule`]s keyed by lowercase weekday name.
///
/// Construction checks that the key space is exactly the seven weekday
/// names, so a lookup for a real weekday can never silently miss.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, DaySchedule>")]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    pub fn from_fn(mut f: impl FnMut(Weekday) -> DaySchedule) -> Self {
        let days = std::array::from_fn(|i| {
            let day = Weekday::try_from(i as u8).unwrap_or(Weekday::Mon);
            f(day)
        });
        Self { days }
    }

    pub fn get(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Lookup by name; unknown names yield `None`.
    pub fn by_name(&self, name: &str) -> Option<&DaySchedule> {
        WEEKDAY_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| &self.days[i])
    }

    /// Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &DaySchedule)> {
        WEEKDAY_NAMES.iter().copied().zip(self.days.iter())
    }
}

impl TryFrom<HashMap<String, DaySchedule>> for WeeklySchedule {
    type Error = AppError;

    fn try_from(mut map: HashMap<String, DaySchedule>) -> Result<Self, Self::Error> {
        let mut unknown: Vec<&String> = map
            .keys()
            .filter(|k| !WEEKDAY_NAMES.contains(&k.as_str()))
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(AppError::InvalidSchedule(format!(
                "unknown weekday keys: {}",
                unknown
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        let missing: Vec<&str> = WEEKDAY_NAMES
            .iter()
            .copied()
            .filter(|n| !map.contains_key(*n))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::InvalidSchedule(format!(
                "missing weekdays: {}",
                missing.join(", ")
            )));
        }

        Ok(WeeklySchedule::from_fn(|day| {
            map.remove(weekday_name(day)).unwrap_or_default()
        }))
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (name, day) in self.iter() {
            map.serialize_entry(name, day)?;
        }
        map.end()
    }
}
