//! Rotation pattern parameters.
//!
//! One spec per duty type. Specs are plain values built once from the
//! roster constants; the evaluators in [`crate::evaluator`] interpret them.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::DutyType;
use crate::cycle;

/// Parameters of a fixed weekday rotation (6-week / 42-day cycle).
///
/// # Cycle Origin
/// The cycle starts at the first occurrence of `designated_weekday` on or
/// after `cycle_anchor_date`. When the anchor already falls on the
/// designated weekday the origin is the anchor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRotationSpec {
    /// Duty type this rotation belongs to.
    pub duty: DutyType,
    /// Weekday of regular duty.
    pub designated_weekday: Weekday,
    /// Date the cycle is anchored to.
    pub cycle_anchor_date: NaiveDate,
    /// Pattern week (1–6) that the first week of the cycle maps to.
    pub cycle_offset: u8,
}

impl FixedRotationSpec {
    /// Creates a fixed rotation spec.
    pub fn new(
        duty: DutyType,
        designated_weekday: Weekday,
        cycle_anchor_date: NaiveDate,
        cycle_offset: u8,
    ) -> Self {
        Self {
            duty,
            designated_weekday,
            cycle_anchor_date,
            cycle_offset,
        }
    }

    /// First date of the cycle. `None` if it lies beyond the calendar range.
    pub fn cycle_origin(&self) -> Option<NaiveDate> {
        cycle::next_weekday_on_or_after(self.cycle_anchor_date, self.designated_weekday)
    }

    /// Whether the anchor date falls on the designated weekday.
    pub fn anchor_on_weekday(&self) -> bool {
        self.cycle_origin() == Some(self.cycle_anchor_date)
    }
}

/// Parameters of a floating rotation (fixed 6-day cadence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingRotationSpec {
    /// Duty type this rotation belongs to.
    pub duty: DutyType,
    /// First date this rotation is active.
    pub anchor_date: NaiveDate,
}

impl FloatingRotationSpec {
    /// Recurrence period in days.
    pub const PERIOD_DAYS: i64 = cycle::FLOAT_PERIOD_DAYS;

    /// Creates a floating rotation spec.
    pub fn new(duty: DutyType, anchor_date: NaiveDate) -> Self {
        Self { duty, anchor_date }
    }
}
