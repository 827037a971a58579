//! Rotation domain models.
//!
//! Core data types for the duty roster: duty identifiers, rotation pattern
//! parameters, calendar ranges, and the resolved schedule.
//!
//! # Domain Mappings
//!
//! | duty-roster | Surgical on-call |
//! |-------------|------------------|
//! | DutyType | Rotating surgical team |
//! | FixedRotationSpec | Weekday team (Mon–Thu) |
//! | FloatingRotationSpec | Floating team |
//! | Assignment | Team on call for one day |
//! | ScheduleMap | Yearly on-call calendar |

mod calendar;
mod duty;
mod rotation;
mod schedule;

pub use calendar::{DateRange, DayCell, MonthGrid};
pub use duty::{DutyType, Phase};
pub use rotation::{FixedRotationSpec, FloatingRotationSpec};
pub use schedule::{Assignment, Conflict, ScheduleMap, ScheduleReport};
