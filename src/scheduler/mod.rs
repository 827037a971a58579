//! Schedule generation.
//!
//! Materializes a date → duty schedule for a range by asking every
//! rotation pattern about every date, resolving collisions by priority and
//! reporting conflicts and gaps as data.
//!
//! # Policies
//!
//! - `Permissive` (default): never aborts; conflicts and gaps are returned
//!   alongside the schedule.
//! - `Strict`: fails fast with `ScheduleConflict` / `ScheduleGap` on the
//!   first offending date.

mod generator;

pub use generator::{ConflictPolicy, ScheduleGenerator};
pub(crate) use generator::resolve_date;
