//! Duty type and phase identifiers.
//!
//! The roster has six duty types: four fixed rotations named after their
//! weekday and two floating rotations. Each ownership of a date is tagged
//! with the [`Phase`] of the pattern that produced it.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six recurring on-call rotation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyType {
    /// Fixed rotation designated on Mondays.
    Monday,
    /// Fixed rotation designated on Tuesdays.
    Tuesday,
    /// Fixed rotation designated on Wednesdays.
    Wednesday,
    /// Fixed rotation designated on Thursdays.
    Thursday,
    /// First floating rotation (6-day cadence).
    Float1,
    /// Second floating rotation, one day behind Float-1.
    Float2,
}

impl DutyType {
    /// All duty types in declaration order.
    pub const ALL: [DutyType; 6] = [
        DutyType::Monday,
        DutyType::Tuesday,
        DutyType::Wednesday,
        DutyType::Thursday,
        DutyType::Float1,
        DutyType::Float2,
    ];

    /// Resolution order used when several duty types claim one date.
    ///
    /// Earlier entries win.
    pub const PRIORITY: [DutyType; 6] = [
        DutyType::Thursday,
        DutyType::Wednesday,
        DutyType::Tuesday,
        DutyType::Monday,
        DutyType::Float1,
        DutyType::Float2,
    ];

    /// Position in [`DutyType::PRIORITY`] (0 = highest priority).
    pub fn priority_rank(self) -> usize {
        match self {
            DutyType::Thursday => 0,
            DutyType::Wednesday => 1,
            DutyType::Tuesday => 2,
            DutyType::Monday => 3,
            DutyType::Float1 => 4,
            DutyType::Float2 => 5,
        }
    }

    /// Whether this is one of the four weekday rotations.
    pub fn is_fixed(self) -> bool {
        self.weekday().is_some()
    }

    /// Whether this is one of the two floating rotations.
    pub fn is_floating(self) -> bool {
        !self.is_fixed()
    }

    /// The weekday a fixed rotation is named after.
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            DutyType::Monday => Some(Weekday::Mon),
            DutyType::Tuesday => Some(Weekday::Tue),
            DutyType::Wednesday => Some(Weekday::Wed),
            DutyType::Thursday => Some(Weekday::Thu),
            DutyType::Float1 | DutyType::Float2 => None,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            DutyType::Monday => "Monday rotation",
            DutyType::Tuesday => "Tuesday rotation",
            DutyType::Wednesday => "Wednesday rotation",
            DutyType::Thursday => "Thursday rotation",
            DutyType::Float1 => "Float-1",
            DutyType::Float2 => "Float-2",
        }
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which part of a rotation pattern produced an ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Regular duty on the designated weekday (pattern weeks 1–4).
    Designated,
    /// Extra Sunday duty in pattern week 4.
    ExtraSunday,
    /// Duty advanced onto Saturday (pattern week 5).
    AdvanceSaturday,
    /// Duty advanced onto Friday (pattern week 6).
    AdvanceFriday,
    /// Floating rotation slot.
    Floating,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Designated => "designated",
            Phase::ExtraSunday => "extra Sunday",
            Phase::AdvanceSaturday => "advance Saturday",
            Phase::AdvanceFriday => "advance Friday",
            Phase::Floating => "floating",
        };
        f.write_str(s)
    }
}
