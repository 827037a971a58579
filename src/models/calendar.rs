//! Calendar ranges and month grids.
//!
//! # Date Model
//! All dates are naive calendar dates. No timezone is involved.
//!
//! # Ranges
//! [`DateRange`] is inclusive on both ends. A range whose end precedes its
//! start is empty, not an error.
//!
//! # Month Grid
//! [`MonthGrid`] lays out one month as Monday-first weeks for a
//! rendering collaborator. It carries data only.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Assignment, ScheduleMap};
use crate::cycle;
use crate::error::Result;

/// An inclusive date interval [start, end].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range. `end < start` yields an empty range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The whole calendar year.
    pub fn year(year: i32) -> Result<Self> {
        Ok(Self::new(cycle::date(year, 1, 1)?, cycle::date(year, 12, 31)?))
    }

    /// January 1 of `first_year` through December 31 of `last_year`.
    pub fn years(first_year: i32, last_year: i32) -> Result<Self> {
        Ok(Self::new(
            cycle::date(first_year, 1, 1)?,
            cycle::date(last_year, 12, 31)?,
        ))
    }

    /// One calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let first = cycle::date(year, month, 1)?;
        Ok(Self::new(first, last_day_of_month(first)))
    }

    /// First date.
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date (inclusive).
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the range contains no dates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of dates in the range.
    pub fn len_days(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            cycle::days_between(self.start, self.end) as u64 + 1
        }
    }

    /// Whether a date falls within the range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether two ranges share at least one date.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start <= other.end
            && other.start <= self.end
    }

    /// Dates of the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let empty = self.is_empty();
        self.start
            .iter_days()
            .take_while(move |d| !empty && *d <= end)
    }

    /// Splits the range into consecutive chunks of at most `days` dates.
    pub fn chunks(&self, days: u64) -> Vec<DateRange> {
        let days = days.max(1);
        let mut chunks = Vec::new();
        let mut start = self.start;
        while !self.is_empty() && start <= self.end {
            let chunk_end = start
                .checked_add_days(Days::new(days - 1))
                .map_or(self.end, |e| e.min(self.end));
            chunks.push(DateRange::new(start, chunk_end));
            match chunk_end.succ_opt() {
                Some(next) => start = next,
                None => break,
            }
        }
        chunks
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// One day cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Calendar date.
    pub date: NaiveDate,
    /// Day of month (1–31).
    pub day: u32,
    /// Assignment for the date, `None` for a gap.
    pub assignment: Option<Assignment>,
}

/// A month laid out as Monday-first weeks.
///
/// Cells before the first and after the last day of the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Year.
    pub year: i32,
    /// Month (1–12).
    pub month: u32,
    /// Week rows, Monday through Sunday.
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthGrid {
    /// Builds the grid for one month from a schedule.
    pub fn build(year: i32, month: u32, schedule: &ScheduleMap) -> Result<Self> {
        let range = DateRange::month(year, month)?;
        let mut weeks: Vec<[Option<DayCell>; 7]> = Vec::new();
        let mut row: [Option<DayCell>; 7] = Default::default();

        for date in range.iter() {
            let col = usize::from(cycle::weekday_index(date.weekday()));
            row[col] = Some(DayCell {
                date,
                day: date.day(),
                assignment: schedule.get(date).copied(),
            });
            if col == 6 {
                weeks.push(std::mem::take(&mut row));
            }
        }
        if row.iter().any(Option::is_some) {
            weeks.push(row);
        }

        Ok(Self { year, month, weeks })
    }

    /// Number of leading blank cells in the first week.
    pub fn leading_blanks(&self) -> usize {
        self.weeks
            .first()
            .map_or(0, |w| w.iter().take_while(|c| c.is_none()).count())
    }

    /// Cells that have no assignment.
    pub fn gaps(&self) -> Vec<NaiveDate> {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|c| c.assignment.is_none())
            .map(|c| c.date)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DutyType, Phase};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_range_basics() {
        let r = DateRange::new(d(2025, 1, 30), d(2025, 2, 2));
        assert_eq!(r.len_days(), 4);
        assert!(r.contains(d(2025, 1, 30)));
        assert!(r.contains(d(2025, 2, 2))); // inclusive end
        assert!(!r.contains(d(2025, 2, 3)));
        let dates: Vec<NaiveDate> = r.iter().collect();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[2], d(2025, 2, 1));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let r = DateRange::new(d(2025, 2, 2), d(2025, 1, 30));
        assert!(r.is_empty());
        assert_eq!(r.len_days(), 0);
        assert_eq!(r.iter().count(), 0);
        assert!(r.chunks(10).is_empty());
    }

    #[test]
    fn test_range_overlap() {
        let a = DateRange::new(d(2025, 1, 1), d(2025, 1, 10));
        let b = DateRange::new(d(2025, 1, 10), d(2025, 1, 20));
        let c = DateRange::new(d(2025, 1, 11), d(2025, 1, 20));
        assert!(a.overlaps(&b)); // sharing the boundary date
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_year_and_month_ranges() {
        assert_eq!(DateRange::year(2025).unwrap().len_days(), 365);
        assert_eq!(DateRange::year(2024).unwrap().len_days(), 366);
        assert_eq!(DateRange::years(2025, 2026).unwrap().len_days(), 730);
        assert_eq!(DateRange::month(2025, 2).unwrap().end(), d(2025, 2, 28));
        assert_eq!(DateRange::month(2025, 12).unwrap().end(), d(2025, 12, 31));
        assert!(DateRange::month(2025, 13).is_err());
    }

    #[test]
    fn test_chunks_cover_range() {
        let r = DateRange::year(2025).unwrap();
        let chunks = r.chunks(100);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].start(), r.start());
        assert_eq!(chunks[3].end(), r.end());
        let total: u64 = chunks.iter().map(|c| c.len_days()).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn test_month_grid_layout() {
        let mut schedule = ScheduleMap::new();
        schedule.insert(Assignment::new(d(2025, 2, 1), DutyType::Float1, Phase::Floating));

        // February 2025 starts on a Saturday
        let grid = MonthGrid::build(2025, 2, &schedule).unwrap();
        assert_eq!(grid.leading_blanks(), 5);
        assert_eq!(grid.weeks.len(), 5);
        let first = grid.weeks[0][5].as_ref().unwrap();
        assert_eq!(first.day, 1);
        assert_eq!(first.assignment.map(|a| a.duty), Some(DutyType::Float1));
        assert_eq!(grid.gaps().len(), 27);
        // last row ends on Friday the 28th
        assert!(grid.weeks[4][4].is_some());
        assert!(grid.weeks[4][5].is_none());
    }
}
