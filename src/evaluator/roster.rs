//! The full set of rotation patterns.
//!
//! A [`Roster`] bundles the fixed and floating specs and answers point
//! queries: whether a duty type owns a date, and which duty type wins a
//! date under the priority order.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::RotationPattern;
use crate::models::{
    Assignment, DateRange, DutyType, FixedRotationSpec, FloatingRotationSpec, Phase,
};

/// Fixed and floating rotation specs, kept in priority order.
///
/// Deserialization goes through [`Roster::new`], so stored rosters are
/// reordered and deduplicated like constructed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RosterParts")]
pub struct Roster {
    fixed: Vec<FixedRotationSpec>,
    floating: Vec<FloatingRotationSpec>,
}

/// Serialized form of a [`Roster`], in any order.
#[derive(Deserialize)]
struct RosterParts {
    #[serde(default)]
    fixed: Vec<FixedRotationSpec>,
    #[serde(default)]
    floating: Vec<FloatingRotationSpec>,
}

impl From<RosterParts> for Roster {
    fn from(parts: RosterParts) -> Self {
        Self::new(parts.fixed, parts.floating)
    }
}

impl Roster {
    /// Creates a roster. Specs are reordered by [`DutyType::PRIORITY`].
    ///
    /// Each duty type keeps only its first spec; later specs for the same
    /// duty type are dropped. No other consistency checks are made here;
    /// see [`crate::validation::validate_config`].
    pub fn new(
        mut fixed: Vec<FixedRotationSpec>,
        mut floating: Vec<FloatingRotationSpec>,
    ) -> Self {
        // stable sort keeps duplicates in input order, so dedup keeps the first
        fixed.sort_by_key(|s| s.duty.priority_rank());
        fixed.dedup_by_key(|s| s.duty);
        floating.sort_by_key(|s| s.duty.priority_rank());
        floating.dedup_by_key(|s| s.duty);
        Self { fixed, floating }
    }

    /// Fixed rotation specs in priority order.
    pub fn fixed(&self) -> &[FixedRotationSpec] {
        &self.fixed
    }

    /// Floating rotation specs in priority order.
    pub fn floating(&self) -> &[FloatingRotationSpec] {
        &self.floating
    }

    /// All patterns, fixed first, each group in priority order.
    pub fn patterns(&self) -> impl Iterator<Item = &dyn RotationPattern> {
        self.fixed
            .iter()
            .map(|s| s as &dyn RotationPattern)
            .chain(self.floating.iter().map(|s| s as &dyn RotationPattern))
    }

    /// Pattern for a duty type, if the roster has one.
    pub fn pattern(&self, duty: DutyType) -> Option<&dyn RotationPattern> {
        self.patterns().find(|p| p.duty() == duty)
    }

    /// Whether `duty` owns `date`. Unknown duty types own nothing.
    pub fn is_owner(&self, duty: DutyType, date: NaiveDate) -> bool {
        self.pattern(duty).is_some_and(|p| p.owns(date))
    }

    /// Every duty type claiming `date`, in priority order.
    pub fn claimants(&self, date: NaiveDate) -> Vec<(DutyType, Phase)> {
        self.patterns()
            .filter_map(|p| p.phase_on(date).map(|phase| (p.duty(), phase)))
            .collect()
    }

    /// The winning assignment for `date`, or `None` for a gap.
    pub fn owner_of(&self, date: NaiveDate) -> Option<Assignment> {
        self.patterns()
            .find_map(|p| p.phase_on(date).map(|phase| Assignment::new(date, p.duty(), phase)))
    }

    /// Dates in `range` that `duty` claims, ignoring other duty types.
    pub fn occurrences(&self, duty: DutyType, range: DateRange) -> Vec<NaiveDate> {
        match self.pattern(duty) {
            Some(p) => range.iter().filter(|&date| p.owns(date)).collect(),
            None => Vec::new(),
        }
    }

    /// The roster used by the live calendar since January 2025.
    ///
    /// | Duty | Weekday | Anchor | Offset |
    /// |------|---------|--------|--------|
    /// | Thursday | Thu | 2025-01-02 | 4 |
    /// | Wednesday | Wed | 2025-01-01 | 3 |
    /// | Tuesday | Tue | 2025-01-07 | 3 |
    /// | Monday | Mon | 2025-01-06 | 2 |
    /// | Float-1 | – | 2025-01-03 | – |
    /// | Float-2 | – | 2025-01-04 | – |
    pub fn historical() -> Self {
        let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).expect("constant roster date");
        Self::new(
            vec![
                FixedRotationSpec::new(DutyType::Thursday, Weekday::Thu, date(1, 2), 4),
                FixedRotationSpec::new(DutyType::Wednesday, Weekday::Wed, date(1, 1), 3),
                FixedRotationSpec::new(DutyType::Tuesday, Weekday::Tue, date(1, 7), 3),
                FixedRotationSpec::new(DutyType::Monday, Weekday::Mon, date(1, 6), 2),
            ],
            vec![
                FloatingRotationSpec::new(DutyType::Float1, date(1, 3)),
                FloatingRotationSpec::new(DutyType::Float2, date(1, 4)),
            ],
        )
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::historical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_historical_first_weeks() {
        let roster = Roster::historical();
        let expected = [
            (d(2025, 1, 1), DutyType::Wednesday),
            (d(2025, 1, 2), DutyType::Thursday),
            (d(2025, 1, 3), DutyType::Float1),
            (d(2025, 1, 4), DutyType::Float2),
            (d(2025, 1, 5), DutyType::Thursday),
            (d(2025, 1, 6), DutyType::Monday),
            (d(2025, 1, 7), DutyType::Tuesday),
            (d(2025, 1, 8), DutyType::Wednesday),
            (d(2025, 1, 9), DutyType::Float1),
            (d(2025, 1, 10), DutyType::Float2),
            (d(2025, 1, 11), DutyType::Thursday),
            (d(2025, 1, 12), DutyType::Wednesday),
            (d(2025, 1, 19), DutyType::Tuesday),
        ];
        for (date, duty) in expected {
            assert_eq!(roster.owner_of(date).map(|a| a.duty), Some(duty), "{date}");
            assert!(roster.is_owner(duty, date), "{date}");
        }
    }

    #[test]
    fn test_phase_of_owner() {
        let roster = Roster::historical();
        let a = roster.owner_of(d(2025, 1, 5)).unwrap();
        assert_eq!(a.phase, Phase::ExtraSunday);
        let a = roster.owner_of(d(2025, 1, 11)).unwrap();
        assert_eq!(a.phase, Phase::AdvanceSaturday);
    }

    #[test]
    fn test_gap_before_anchors() {
        let roster = Roster::historical();
        assert!(roster.owner_of(d(2024, 12, 31)).is_none());
        assert!(roster.claimants(d(2024, 12, 31)).is_empty());
    }

    #[test]
    fn test_priority_order_preserved() {
        let roster = Roster::historical();
        let order: Vec<DutyType> = roster.patterns().map(|p| p.duty()).collect();
        assert_eq!(order, DutyType::PRIORITY.to_vec());
    }

    #[test]
    fn test_claimants_in_priority_order() {
        // Thursday and Monday rotations on identical Wednesday patterns
        let anchor = d(2025, 2, 5);
        let roster = Roster::new(
            vec![
                FixedRotationSpec::new(DutyType::Monday, Weekday::Wed, anchor, 3),
                FixedRotationSpec::new(DutyType::Thursday, Weekday::Wed, anchor, 3),
            ],
            vec![],
        );
        let claims = roster.claimants(anchor);
        assert_eq!(
            claims,
            vec![
                (DutyType::Thursday, Phase::Designated),
                (DutyType::Monday, Phase::Designated)
            ]
        );
        assert_eq!(roster.owner_of(anchor).map(|a| a.duty), Some(DutyType::Thursday));
    }

    #[test]
    fn test_unknown_duty_owns_nothing() {
        let roster = Roster::new(
            vec![],
            vec![FloatingRotationSpec::new(DutyType::Float1, d(2025, 1, 3))],
        );
        assert!(!roster.is_owner(DutyType::Float2, d(2025, 1, 4)));
        assert!(roster.occurrences(DutyType::Monday, DateRange::year(2025).unwrap()).is_empty());
    }

    #[test]
    fn test_occurrences() {
        let roster = Roster::historical();
        let jan = DateRange::month(2025, 1).unwrap();
        let f1 = roster.occurrences(DutyType::Float1, jan);
        assert_eq!(f1.first(), Some(&d(2025, 1, 3)));
        assert_eq!(f1.len(), 5); // 3, 9, 15, 21, 27
    }

    #[test]
    fn test_deserialize_restores_priority_order() {
        let anchor = d(2025, 2, 5);
        let stored = serde_json::json!({
            "fixed": [
                FixedRotationSpec::new(DutyType::Monday, Weekday::Wed, anchor, 3),
                FixedRotationSpec::new(DutyType::Thursday, Weekday::Wed, anchor, 3),
            ],
            "floating": [
                FloatingRotationSpec::new(DutyType::Float2, d(2025, 1, 4)),
                FloatingRotationSpec::new(DutyType::Float1, d(2025, 1, 3)),
            ],
        });
        let roster: Roster = serde_json::from_value(stored).unwrap();
        let order: Vec<DutyType> = roster.patterns().map(|p| p.duty()).collect();
        assert_eq!(
            order,
            vec![
                DutyType::Thursday,
                DutyType::Monday,
                DutyType::Float1,
                DutyType::Float2
            ]
        );
        assert_eq!(roster.owner_of(anchor).map(|a| a.duty), Some(DutyType::Thursday));
    }

    #[test]
    fn test_serde_round_trip_matches_constructor() {
        let roster = Roster::historical();
        let text = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&text).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn test_duplicate_duty_keeps_first_spec() {
        let first = FixedRotationSpec::new(DutyType::Monday, Weekday::Mon, d(2025, 1, 6), 2);
        let second = FixedRotationSpec::new(DutyType::Monday, Weekday::Wed, d(2025, 2, 5), 3);
        let roster = Roster::new(vec![first, second], vec![]);
        assert_eq!(roster.fixed(), &[first]);

        // 2025-02-05 is only claimed by the dropped spec
        let date = d(2025, 2, 5);
        assert!(!roster.is_owner(DutyType::Monday, date));
        assert!(roster.owner_of(date).is_none());
        for date in DateRange::year(2025).unwrap().iter() {
            let owner = roster.owner_of(date).map(|a| a.duty);
            assert_eq!(owner == Some(DutyType::Monday), roster.is_owner(DutyType::Monday, date));
        }
    }
}
