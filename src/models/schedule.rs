//! Schedule (solution) model.
//!
//! A schedule maps every covered date to exactly one duty type. Generation
//! also reports the dates where the rotation patterns disagree (conflicts)
//! or where none of them applies (gaps).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DateRange, DutyType, Phase};

/// A resolved date → duty type assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned calendar date.
    pub date: NaiveDate,
    /// Owning duty type.
    pub duty: DutyType,
    /// Pattern phase that produced the ownership.
    pub phase: Phase,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(date: NaiveDate, duty: DutyType, phase: Phase) -> Self {
        Self { date, duty, phase }
    }
}

/// Two duty types claiming the same date.
///
/// `first` is the duty type that won under the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Contested date.
    pub date: NaiveDate,
    /// Winning duty type.
    pub first: DutyType,
    /// Losing claimant.
    pub second: DutyType,
}

impl Conflict {
    /// Creates a conflict record.
    pub fn new(date: NaiveDate, first: DutyType, second: DutyType) -> Self {
        Self {
            date,
            first,
            second,
        }
    }
}

/// Date-ordered map of assignments.
///
/// Keys are unique by construction: one assignment per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleMap {
    assignments: BTreeMap<NaiveDate, Assignment>,
}

impl ScheduleMap {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an assignment, replacing any previous one for its date.
    pub(crate) fn insert(&mut self, assignment: Assignment) -> Option<Assignment> {
        self.assignments.insert(assignment.date, assignment)
    }

    /// Assignment for a date.
    pub fn get(&self, date: NaiveDate) -> Option<&Assignment> {
        self.assignments.get(&date)
    }

    /// Owning duty type for a date.
    pub fn duty_on(&self, date: NaiveDate) -> Option<DutyType> {
        self.get(date).map(|a| a.duty)
    }

    /// Whether a date has an assignment.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.assignments.contains_key(&date)
    }

    /// Number of assigned dates.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no date is assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignments in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.values()
    }

    /// Assigned dates in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.assignments.keys().copied()
    }

    /// Assignments within a date range.
    pub fn in_range(&self, range: DateRange) -> impl Iterator<Item = &Assignment> {
        let bounds = if range.is_empty() {
            // BTreeMap::range panics when start > end
            None
        } else {
            Some(range.start()..=range.end())
        };
        bounds
            .into_iter()
            .flat_map(move |b| self.assignments.range(b).map(|(_, a)| a))
    }

    /// Dates owned by one duty type.
    pub fn dates_for(&self, duty: DutyType) -> Vec<NaiveDate> {
        self.iter().filter(|a| a.duty == duty).map(|a| a.date).collect()
    }

    /// Number of dates owned by each duty type, in priority order.
    pub fn counts(&self) -> Vec<(DutyType, usize)> {
        DutyType::PRIORITY
            .iter()
            .map(|&duty| (duty, self.iter().filter(|a| a.duty == duty).count()))
            .collect()
    }

    /// Whether every date of `range` is assigned.
    pub fn covers(&self, range: DateRange) -> bool {
        range.iter().all(|date| self.contains(date))
    }
}

/// Output of one schedule generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Resolved assignments.
    pub schedule: ScheduleMap,
    /// Dates claimed by more than one duty type.
    pub conflicts: Vec<Conflict>,
    /// Dates no duty type claimed (absent from `schedule`).
    pub unassigned: Vec<NaiveDate>,
}

impl ScheduleReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the generation produced no conflicts and no gaps.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.unassigned.is_empty()
    }

    /// Number of assigned dates.
    pub fn assignment_count(&self) -> usize {
        self.schedule.len()
    }

    /// Dates involved in at least one conflict, deduplicated and ordered.
    pub fn conflicted_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.conflicts.iter().map(|c| c.date).collect();
        dates.dedup();
        dates
    }
}
