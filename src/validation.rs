//! Input validation for roster configurations.
//!
//! Checks structural integrity of the rotation constants before any
//! schedule is built. Detects:
//! - Cycle offsets outside 1–6 and weekday indices outside 0–6
//! - Missing, duplicate, or misplaced duty types
//! - Weekday rotations configured on another duty type's weekday
//! - Float-2 not anchored one day after Float-1
//! - Fixed anchors off their designated weekday (when required)
//!
//! [`verify_horizon`] additionally resolves a date range and reports every
//! conflict and gap, for use before seeding a store.

use std::collections::HashSet;
use std::fmt;

use chrono::Days;

use crate::config::RosterConfig;
use crate::cycle;
use crate::evaluator::Roster;
use crate::models::{DateRange, DutyType};
use crate::scheduler::resolve_date;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Cycle offset outside 1–6.
    InvalidOffset,
    /// Weekday index outside 0–6.
    InvalidWeekday,
    /// A duty type appears more than once.
    DuplicateDuty,
    /// A weekday rotation has no entry.
    MissingDuty,
    /// A floating duty type listed as a fixed rotation.
    MisplacedDuty,
    /// A weekday rotation designated on a different weekday.
    WeekdayMismatch,
    /// Float-2 is not anchored one day after Float-1.
    FloatSpacing,
    /// A fixed anchor does not fall on its designated weekday.
    AnchorOffWeekday,
    /// Two duty types claim the same date.
    Conflict,
    /// No duty type claims a date.
    Gap,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a roster configuration.
///
/// Checks:
/// 1. Every fixed entry has a weekday index in 0–6 and an offset in 1–6
/// 2. Fixed entries only use weekday duty types, each exactly once
/// 3. Each weekday rotation is designated on its own weekday
/// 4. All four weekday rotations are present
/// 5. Float-2 is anchored exactly one day after Float-1, and that day exists
/// 6. Anchors fall on the designated weekday, if `require_weekday_anchor`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &RosterConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for entry in &config.fixed {
        if entry.duty.is_floating() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MisplacedDuty,
                format!("{} cannot be configured as a fixed rotation", entry.duty),
            ));
        }

        if !seen.insert(entry.duty) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDuty,
                format!("Duplicate fixed rotation: {}", entry.duty),
            ));
        }

        if !(1..=6).contains(&entry.cycle_offset) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOffset,
                format!(
                    "{}: cycle offset {} is outside 1-6",
                    entry.duty, entry.cycle_offset
                ),
            ));
        }

        match cycle::weekday_from_index(entry.designated_weekday) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeekday,
                format!(
                    "{}: weekday index {} is outside 0-6",
                    entry.duty, entry.designated_weekday
                ),
            )),
            Some(weekday) => {
                if let Some(expected) = entry.duty.weekday().filter(|&w| w != weekday) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::WeekdayMismatch,
                        format!(
                            "{} is designated on {} instead of {}",
                            entry.duty, weekday, expected
                        ),
                    ));
                }
                let origin = cycle::next_weekday_on_or_after(entry.cycle_anchor_date, weekday);
                if config.require_weekday_anchor && origin != Some(entry.cycle_anchor_date) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AnchorOffWeekday,
                        format!(
                            "{}: anchor {} is not a {}",
                            entry.duty, entry.cycle_anchor_date, weekday
                        ),
                    ));
                }
            }
        }
    }

    for duty in DutyType::ALL.into_iter().filter(|d| d.is_fixed()) {
        if !seen.contains(&duty) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingDuty,
                format!("No entry for the {duty}"),
            ));
        }
    }

    let next_day = config.float1_anchor.checked_add_days(Days::new(1));
    match (config.float2_anchor, next_day) {
        (_, None) => errors.push(ValidationError::new(
            ValidationErrorKind::FloatSpacing,
            format!(
                "Float-1 anchor {} leaves no day for Float-2",
                config.float1_anchor
            ),
        )),
        (Some(float2), Some(expected)) if float2 != expected => {
            errors.push(ValidationError::new(
                ValidationErrorKind::FloatSpacing,
                format!(
                    "Float-2 anchor {} must be the day after Float-1 anchor {}",
                    float2, config.float1_anchor
                ),
            ))
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Resolves every date of `range` and reports each conflict and gap.
pub fn verify_horizon(roster: &Roster, range: DateRange) -> ValidationResult {
    let mut errors = Vec::new();

    for date in range.iter() {
        let resolution = resolve_date(roster, date);
        for c in &resolution.conflicts {
            errors.push(ValidationError::new(
                ValidationErrorKind::Conflict,
                format!("{date}: {} and {} both claim the date", c.first, c.second),
            ));
        }
        if resolution.owner.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::Gap,
                format!("{date}: no duty type claims the date"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
