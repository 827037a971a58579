//! Floating rotation evaluator: owned every 6th day from the anchor.

use chrono::NaiveDate;

use super::RotationPattern;
use crate::cycle;
use crate::models::{DutyType, FloatingRotationSpec, Phase};

impl RotationPattern for FloatingRotationSpec {
    fn duty(&self) -> DutyType {
        self.duty
    }

    fn phase_on(&self, date: NaiveDate) -> Option<Phase> {
        let days = cycle::days_between(self.anchor_date, date);
        (days >= 0 && days % Self::PERIOD_DAYS == 0).then_some(Phase::Floating)
    }
}
