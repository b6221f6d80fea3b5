//! Scheduling and eligibility core.

pub mod coordinator;
pub mod deadline;
pub mod session;
pub mod slots;
pub mod window;
