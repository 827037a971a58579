//! Error types for the rotation engine.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::DutyType;
use crate::validation::ValidationError;

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Roster error types.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A calendar date that does not exist (e.g. April 31).
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Date text that is not a valid `YYYY-MM-DD` date.
    #[error("invalid date '{input}': {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Two duty types claim the same date (strict generation only).
    #[error("schedule conflict on {date}: {first} and {second} both claim the date")]
    ScheduleConflict {
        date: NaiveDate,
        first: DutyType,
        second: DutyType,
    },

    /// No duty type claims a date (strict generation only).
    #[error("schedule gap on {date}: no duty type claims the date")]
    ScheduleGap { date: NaiveDate },

    /// Roster configuration failed validation.
    #[error("invalid roster configuration ({} problem(s)): {}", .0.len(), join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Configuration text could not be parsed.
    #[error("failed to parse roster configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("failed to serialize roster configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl RosterError {
    /// The date a schedule diagnostic refers to, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::ScheduleConflict { date, .. } | Self::ScheduleGap { date } => Some(*date),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_messages() {
        let e = RosterError::InvalidDate {
            year: 2025,
            month: 4,
            day: 31,
        };
        assert_eq!(e.to_string(), "invalid calendar date: 2025-04-31");

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let e = RosterError::ScheduleGap { date };
        assert_eq!(e.date(), Some(date));
        assert!(e.to_string().contains("2025-03-01"));
    }

    #[test]
    fn test_invalid_config_lists_problems() {
        let e = RosterError::InvalidConfig(vec![
            ValidationError::new(ValidationErrorKind::InvalidOffset, "offset 7"),
            ValidationError::new(ValidationErrorKind::MissingDuty, "no Monday rotation"),
        ]);
        let msg = e.to_string();
        assert!(msg.contains("2 problem(s)"));
        assert!(msg.contains("offset 7"));
        assert!(msg.contains("no Monday rotation"));
        assert_eq!(e.date(), None);
    }
}
