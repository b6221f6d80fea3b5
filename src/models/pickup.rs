use serde::{Deserialize, Serialize};
use std::fmt;

/// A bookable time of day rendered as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(String);

impl TimeSlot {
    pub(crate) fn new(rendered: String) -> Self {
        TimeSlot(rendered)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final pickup choice handed over to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPickup {
    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub display_date: String,
    /// `HH:MM`
    pub time: String,
}
