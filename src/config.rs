//! Roster configuration.
//!
//! The rotation constants (anchor dates, weekdays, offsets) and the
//! generation policy, loadable from TOML. Dates are quoted ISO strings:
//!
//! ```toml
//! float1_anchor = "2025-01-03"
//! policy = "strict"
//!
//! [[fixed]]
//! duty = "wednesday"
//! designated_weekday = 2
//! cycle_anchor_date = "2025-01-01"
//! cycle_offset = 3
//! ```
//!
//! Omitted fields take the values of [`RosterConfig::default`].

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::cycle;
use crate::error::{Result, RosterError};
use crate::evaluator::Roster;
use crate::models::{DutyType, FixedRotationSpec, FloatingRotationSpec};
use crate::scheduler::{ConflictPolicy, ScheduleGenerator};
use crate::validation::{validate_config, ValidationError, ValidationErrorKind};

/// One fixed rotation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRotationConfig {
    /// Duty type (must be a weekday rotation).
    pub duty: DutyType,
    /// Weekday index, Monday = 0 … Sunday = 6.
    pub designated_weekday: u8,
    /// Cycle anchor date.
    pub cycle_anchor_date: NaiveDate,
    /// Pattern week (1–6) of the first cycle week.
    pub cycle_offset: u8,
}

impl FixedRotationConfig {
    /// Creates a fixed rotation entry.
    pub fn new(
        duty: DutyType,
        designated_weekday: u8,
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
}

/// Full roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// First active date of Float-1.
    pub float1_anchor: NaiveDate,
    /// First active date of Float-2. `None` = one day after Float-1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float2_anchor: Option<NaiveDate>,
    /// Generation policy.
    pub policy: ConflictPolicy,
    /// Reject fixed anchors that do not fall on their designated weekday.
    pub require_weekday_anchor: bool,
    /// The four fixed rotations.
    pub fixed: Vec<FixedRotationConfig>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let roster = Roster::historical();
        let fixed = roster
            .fixed()
            .iter()
            .map(|s| {
                FixedRotationConfig::new(
                    s.duty,
                    cycle::weekday_index(s.designated_weekday),
                    s.cycle_anchor_date,
                    s.cycle_offset,
                )
            })
            .collect();
        let float1_anchor = roster
            .floating()
            .iter()
            .find(|s| s.duty == DutyType::Float1)
            .map_or(NaiveDate::MIN, |s| s.anchor_date);
        Self {
            float1_anchor,
            float2_anchor: None,
            policy: ConflictPolicy::Permissive,
            require_weekday_anchor: false,
            fixed,
        }
    }
}

impl RosterConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading roster configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Sets the generation policy.
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Effective Float-2 anchor. `None` only at the end of the calendar.
    pub fn effective_float2_anchor(&self) -> Option<NaiveDate> {
        self.float2_anchor
            .or_else(|| self.float1_anchor.checked_add_days(Days::new(1)))
    }

    /// Validates and builds the roster.
    ///
    /// # Errors
    /// `InvalidConfig` with every validation problem found.
    pub fn to_roster(&self) -> Result<Roster> {
        validate_config(self).map_err(RosterError::InvalidConfig)?;

        let mut fixed = Vec::with_capacity(self.fixed.len());
        for entry in &self.fixed {
            let weekday = cycle::weekday_from_index(entry.designated_weekday).ok_or_else(|| {
                RosterError::InvalidConfig(vec![ValidationError::new(
                    ValidationErrorKind::InvalidWeekday,
                    format!("{}: weekday index {}", entry.duty, entry.designated_weekday),
                )])
            })?;
            fixed.push(FixedRotationSpec::new(
                entry.duty,
                weekday,
                entry.cycle_anchor_date,
                entry.cycle_offset,
            ));
        }

        let mut floating = vec![FloatingRotationSpec::new(DutyType::Float1, self.float1_anchor)];
        if let Some(anchor) = self.effective_float2_anchor() {
            floating.push(FloatingRotationSpec::new(DutyType::Float2, anchor));
        }

        Ok(Roster::new(fixed, floating))
    }

    /// Validates and builds a generator using the configured policy.
    pub fn to_generator(&self) -> Result<ScheduleGenerator> {
        Ok(ScheduleGenerator::new(self.to_roster()?).with_policy(self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_default_matches_historical_roster() {
        let config = RosterConfig::default();
        assert_eq!(config.fixed.len(), 4);
        assert_eq!(config.float1_anchor, d(2025, 1, 3));
        assert_eq!(config.effective_float2_anchor(), Some(d(2025, 1, 4)));
        assert_eq!(config.to_roster().unwrap(), Roster::historical());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RosterConfig::default().with_policy(ConflictPolicy::Strict);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("policy = \"strict\""));
        let back = RosterConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RosterConfig::from_toml_str("policy = \"strict\"\n").unwrap();
        assert_eq!(config.policy, ConflictPolicy::Strict);
        assert_eq!(config.fixed, RosterConfig::default().fixed);
        let generator = config.to_generator().unwrap();
        assert_eq!(generator.policy(), ConflictPolicy::Strict);
    }

    #[test]
    fn test_custom_toml() {
        let text = r#"
float1_anchor = "2025-01-03"
float2_anchor = "2025-01-04"

[[fixed]]
duty = "thursday"
designated_weekday = 3
cycle_anchor_date = "2025-01-02"
cycle_offset = 4

[[fixed]]
duty = "wednesday"
designated_weekday = 2
cycle_anchor_date = "2025-01-01"
cycle_offset = 3

[[fixed]]
duty = "tuesday"
designated_weekday = 1
cycle_anchor_date = "2025-01-07"
cycle_offset = 3

[[fixed]]
duty = "monday"
designated_weekday = 0
cycle_anchor_date = "2025-01-06"
cycle_offset = 2
"#;
        let config = RosterConfig::from_toml_str(text).unwrap();
        let report = config
            .to_generator()
            .unwrap()
            .generate(DateRange::year(2025).unwrap())
            .unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_malformed_toml() {
        let err = RosterConfig::from_toml_str("float1_anchor = \"2025-02-30\"").unwrap_err();
        assert!(matches!(err, RosterError::ConfigParse(_)));
        let err = RosterConfig::from_toml_str("fixed = 3").unwrap_err();
        assert!(matches!(err, RosterError::ConfigParse(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RosterConfig::default();
        config.fixed[0].cycle_offset = 9;
        match config.to_roster().unwrap_err() {
            RosterError::InvalidConfig(errors) => {
                assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::InvalidOffset));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("duty-roster-{}.toml", std::process::id()));
        std::fs::write(&path, RosterConfig::default().to_toml_string().unwrap()).unwrap();
        let config = RosterConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, RosterConfig::default());

        let missing = RosterConfig::from_path(path.with_extension("missing"));
        assert!(matches!(missing, Err(RosterError::Io(_))));
    }
}
