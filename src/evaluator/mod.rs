//! Pattern evaluators.
//!
//! Decides, in constant time, whether a duty type owns a given date.
//! Evaluators are pure: no iteration over earlier dates, no state, so any
//! date can be answered independently and from any thread.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use duty_roster::evaluator::Roster;
//! use duty_roster::models::DutyType;
//!
//! let roster = Roster::default();
//! let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
//! assert!(roster.is_owner(DutyType::Float1, date));
//! assert_eq!(roster.owner_of(date).map(|a| a.duty), Some(DutyType::Float1));
//! ```

mod fixed;
mod floating;
mod roster;

pub use roster::Roster;

use chrono::NaiveDate;
use std::fmt::Debug;

use crate::models::{DutyType, Phase};

/// A rotation pattern that can be asked about any single date.
pub trait RotationPattern: Send + Sync + Debug {
    /// Duty type the pattern belongs to.
    fn duty(&self) -> DutyType;

    /// Phase of the pattern that claims `date`, or `None` if the pattern
    /// does not own it.
    fn phase_on(&self, date: NaiveDate) -> Option<Phase>;

    /// Whether the pattern owns `date`.
    fn owns(&self, date: NaiveDate) -> bool {
        self.phase_on(date).is_some()
    }
}
