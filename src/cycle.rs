//! Date-cycle utilities.
//!
//! Weekday numbering, weekday stepping, and the week-of-cycle arithmetic
//! shared by the pattern evaluators and the schedule generator.
//!
//! # Weekday Numbering
//! Monday = 0 … Sunday = 6 (ISO order, zero-based).
//!
//! # Cycle Model
//! A fixed rotation repeats every [`CYCLE_DAYS`] days, split into
//! [`CYCLE_WEEKS`] pattern weeks labelled 1–6.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Result, RosterError};

/// Days in one pattern week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Pattern weeks in one fixed-rotation cycle.
pub const CYCLE_WEEKS: i64 = 6;

/// Length of one fixed-rotation cycle in days.
pub const CYCLE_DAYS: i64 = DAYS_PER_WEEK * CYCLE_WEEKS;

/// Recurrence period of a floating rotation in days.
pub const FLOAT_PERIOD_DAYS: i64 = 6;

/// Zero-based weekday index (Monday = 0, Sunday = 6).
#[inline]
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_monday() as u8
}

/// Weekday for a zero-based index. `None` if the index is outside 0–6.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Signed number of days from `from` to `to`.
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// First date on or after `date` that falls on `weekday`.
///
/// Returns `None` only when the result would overflow the supported
/// calendar range.
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = date.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let ahead = (target + 7 - current) % 7;
    date.checked_add_days(Days::new(u64::from(ahead)))
}

/// The Sunday closing the Monday-first calendar week that contains `date`.
pub fn sunday_of_week(date: NaiveDate) -> Option<NaiveDate> {
    next_weekday_on_or_after(date, Weekday::Sun)
}

/// Pattern week (1–6) for a non-negative day count since the cycle origin.
///
/// `((day_in_cycle / 7) + offset) mod 6`, with 0 relabelled as 6.
pub fn week_in_cycle(days_since_origin: i64, offset: u8) -> u8 {
    let day_in_cycle = days_since_origin.rem_euclid(CYCLE_DAYS);
    let week = (day_in_cycle / DAYS_PER_WEEK + i64::from(offset)).rem_euclid(CYCLE_WEEKS);
    if week == 0 {
        CYCLE_WEEKS as u8
    } else {
        week as u8
    }
}

/// Builds a calendar date, rejecting out-of-range components.
///
/// `date(2025, 4, 31)` is an error, never April 30 or May 1.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(RosterError::InvalidDate { year, month, day })
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| {
        RosterError::DateParse {
            input: input.to_string(),
            source,
        }
    })
}
