pub mod candidate;
pub mod pickup;
pub mod pickup_day;
pub mod schedule;

pub use candidate::CandidateDate;
pub use pickup::{SelectedPickup, TimeSlot};
pub use pickup_day::PickupDay;
pub use schedule::{DaySchedule, WeeklySchedule};
