//! Fixed weekday rotation evaluator.
//!
//! # Algorithm
//!
//! 1. `days = date - cycle_origin`; negative → not owned.
//! 2. `week = ((days mod 42) div 7 + offset) mod 6`, with 0 read as 6.
//! 3. By pattern week:
//!    - weeks 1–3: the designated weekday
//!    - week 4: the designated weekday, plus Sunday
//!    - week 5: Saturday
//!    - week 6: Friday
//!
//! Four weeks of regular duty, then duty is pulled forward onto Sunday,
//! Saturday and Friday before the cycle restarts.
//!
//! # Complexity
//! O(1) per date.

use chrono::{Datelike, NaiveDate, Weekday};

use super::RotationPattern;
use crate::cycle;
use crate::models::{DutyType, FixedRotationSpec, Phase};

impl FixedRotationSpec {
    /// Pattern week (1–6) of `date`, or `None` before the cycle origin.
    pub fn week_in_cycle(&self, date: NaiveDate) -> Option<u8> {
        let origin = self.cycle_origin()?;
        let days = cycle::days_between(origin, date);
        if days < 0 {
            return None;
        }
        Some(cycle::week_in_cycle(days, self.cycle_offset))
    }
}

impl RotationPattern for FixedRotationSpec {
    fn duty(&self) -> DutyType {
        self.duty
    }

    fn phase_on(&self, date: NaiveDate) -> Option<Phase> {
        let week = self.week_in_cycle(date)?;
        let weekday = date.weekday();
        match week {
            1..=4 if weekday == self.designated_weekday => Some(Phase::Designated),
            4 if weekday == Weekday::Sun => Some(Phase::ExtraSunday),
            5 if weekday == Weekday::Sat => Some(Phase::AdvanceSaturday),
            6 if weekday == Weekday::Fri => Some(Phase::AdvanceFriday),
            _ => None,
        }
    }
}
