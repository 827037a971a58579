//! Schedule generator.
//!
//! # Algorithm
//!
//! 1. For each date in the range, evaluate every pattern in priority order
//!    (Thursday, Wednesday, Tuesday, Monday, Float-1, Float-2).
//! 2. No claimant → the date is a gap and stays out of the map.
//! 3. Several claimants → the first wins; one conflict is recorded per
//!    losing claimant.
//!
//! Dates are independent, so the range can be split freely; the `parallel`
//! feature does exactly that and yields the same report.
//!
//! # Complexity
//! O(d * p) where d=dates, p=patterns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Result, RosterError};
use crate::evaluator::Roster;
use crate::models::{Assignment, Conflict, DateRange, ScheduleReport};

/// How generation reacts to conflicts and gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Record diagnostics and finish the whole range.
    #[default]
    Permissive,
    /// Stop at the first conflicting or uncovered date.
    Strict,
}

/// Resolution of a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateResolution {
    pub date: NaiveDate,
    pub owner: Option<Assignment>,
    pub conflicts: Vec<Conflict>,
}

pub(crate) fn resolve_date(roster: &Roster, date: NaiveDate) -> DateResolution {
    let claimants = roster.claimants(date);
    let owner = claimants
        .first()
        .map(|&(duty, phase)| Assignment::new(date, duty, phase));
    let conflicts = match owner {
        Some(winner) => claimants[1..]
            .iter()
            .map(|&(other, _)| Conflict::new(date, winner.duty, other))
            .collect(),
        None => Vec::new(),
    };
    DateResolution {
        date,
        owner,
        conflicts,
    }
}

/// Generates date → duty schedules from a roster.
///
/// # Example
///
/// ```
/// use duty_roster::evaluator::Roster;
/// use duty_roster::models::DateRange;
/// use duty_roster::scheduler::ScheduleGenerator;
///
/// let generator = ScheduleGenerator::new(Roster::default());
/// let report = generator.generate(DateRange::year(2025).unwrap()).unwrap();
/// assert_eq!(report.assignment_count(), 365);
/// assert!(report.is_clean());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    roster: Roster,
    policy: ConflictPolicy,
}

impl ScheduleGenerator {
    /// Creates a permissive generator.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            policy: ConflictPolicy::Permissive,
        }
    }

    /// Sets the conflict policy.
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The roster being evaluated.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The active conflict policy.
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Generates the schedule for an inclusive date range.
    ///
    /// An empty range (`end < start`) yields an empty report.
    ///
    /// # Errors
    /// Only under [`ConflictPolicy::Strict`]: `ScheduleConflict` or
    /// `ScheduleGap` for the first offending date.
    pub fn generate(&self, range: DateRange) -> Result<ScheduleReport> {
        debug!(
            start = %range.start(),
            end = %range.end(),
            policy = ?self.policy,
            "generating schedule"
        );
        let resolutions = range.iter().map(|date| resolve_date(&self.roster, date));
        let report = self.collect(resolutions)?;
        log_summary(range, &report);
        Ok(report)
    }

    /// Generates the schedule between two dates, both inclusive.
    pub fn generate_between(&self, start: NaiveDate, end: NaiveDate) -> Result<ScheduleReport> {
        self.generate(DateRange::new(start, end))
    }

    /// Folds per-date resolutions (in date order) into a report.
    pub(crate) fn collect<I>(&self, resolutions: I) -> Result<ScheduleReport>
    where
        I: IntoIterator<Item = DateResolution>,
    {
        let mut report = ScheduleReport::new();
        for resolution in resolutions {
            let DateResolution {
                date,
                owner,
                conflicts,
            } = resolution;

            if let Some(conflict) = conflicts.first() {
                if self.policy == ConflictPolicy::Strict {
                    return Err(RosterError::ScheduleConflict {
                        date,
                        first: conflict.first,
                        second: conflict.second,
                    });
                }
            }
            for conflict in &conflicts {
                warn!(
                    %date,
                    winner = %conflict.first,
                    loser = %conflict.second,
                    "schedule conflict"
                );
            }
            report.conflicts.extend(conflicts);

            match owner {
                Some(assignment) => {
                    report.schedule.insert(assignment);
                }
                None => {
                    if self.policy == ConflictPolicy::Strict {
                        return Err(RosterError::ScheduleGap { date });
                    }
                    warn!(%date, "no duty type claims date");
                    report.unassigned.push(date);
                }
            }
        }
        Ok(report)
    }
}

fn log_summary(range: DateRange, report: &ScheduleReport) {
    info!(
        start = %range.start(),
        end = %range.end(),
        assigned = report.assignment_count(),
        conflicts = report.conflicts.len(),
        gaps = report.unassigned.len(),
        "schedule generated"
    );
}

#[cfg(feature = "parallel")]
impl ScheduleGenerator {
    /// Parallel variant of [`ScheduleGenerator::generate`].
    ///
    /// Dates are resolved on the rayon pool and folded in date order, so the
    /// report (and the first strict-mode error) matches the sequential one.
    pub fn generate_parallel(&self, range: DateRange) -> Result<ScheduleReport> {
        use rayon::prelude::*;

        debug!(start = %range.start(), end = %range.end(), "generating schedule in parallel");
        let dates: Vec<NaiveDate> = range.iter().collect();
        let resolutions: Vec<DateResolution> = dates
            .par_iter()
            .map(|&date| resolve_date(&self.roster, date))
            .collect();
        let report = self.collect(resolutions)?;
        log_summary(range, &report);
        Ok(report)
    }
}
