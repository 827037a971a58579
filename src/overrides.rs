//! Personnel layered on top of the computed schedule.
//!
//! The engine decides which duty type owns a date; who staffs it is a
//! separate record kept by an [`OverrideStore`]. [`StaffingService`] seeds
//! the store from a generated schedule, answers "who covers date X", and
//! applies edits to one date or to a date and every later recurrence of the
//! same duty type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::evaluator::Roster;
use crate::models::{DutyType, ScheduleReport};

/// The two surgeons staffing a duty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Personnel {
    /// First surgeon.
    pub primary: String,
    /// Second surgeon.
    pub secondary: String,
}

impl Personnel {
    /// Creates a personnel pair.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// Stored staffing for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRecord {
    /// Calendar date.
    pub date: NaiveDate,
    /// Duty type on call.
    pub duty: DutyType,
    /// Assigned personnel.
    pub personnel: Personnel,
}

/// Keyed record store for staffing overrides, one record per date.
pub trait OverrideStore {
    /// Record for a date.
    fn get(&self, date: NaiveDate) -> Option<StaffingRecord>;

    /// Inserts or replaces the record for `record.date`.
    fn put(&mut self, record: StaffingRecord);

    /// Records dated on or after `date`, in date order.
    fn records_from(&self, date: NaiveDate) -> Vec<StaffingRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `BTreeMap`-backed store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryOverrideStore {
    records: BTreeMap<NaiveDate, StaffingRecord>,
}

impl InMemoryOverrideStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideStore for InMemoryOverrideStore {
    fn get(&self, date: NaiveDate) -> Option<StaffingRecord> {
        self.records.get(&date).cloned()
    }

    fn put(&mut self, record: StaffingRecord) {
        self.records.insert(record.date, record);
    }

    fn records_from(&self, date: NaiveDate) -> Vec<StaffingRecord> {
        self.records.range(date..).map(|(_, r)| r.clone()).collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Default personnel per duty type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultStaffing {
    teams: HashMap<DutyType, Personnel>,
}

impl DefaultStaffing {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the team for a duty type.
    pub fn with_team(mut self, duty: DutyType, personnel: Personnel) -> Self {
        self.teams.insert(duty, personnel);
        self
    }

    /// Team for a duty type.
    pub fn team(&self, duty: DutyType) -> Option<&Personnel> {
        self.teams.get(&duty)
    }
}

/// How far an edit reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditScope {
    /// Only the given date.
    ThisDate,
    /// The given date and every stored later date of the same duty type.
    ThisAndFuture,
}

/// Who covers a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    /// Calendar date.
    pub date: NaiveDate,
    /// Duty type on call.
    pub duty: DutyType,
    /// Personnel, if known.
    pub personnel: Option<Personnel>,
    /// Whether the answer came from the store rather than the defaults.
    pub stored: bool,
}

/// Combines the roster, default teams, and an override store.
#[derive(Debug, Clone)]
pub struct StaffingService<S: OverrideStore = InMemoryOverrideStore> {
    roster: Roster,
    defaults: DefaultStaffing,
    store: S,
}

impl<S: OverrideStore> StaffingService<S> {
    /// Creates a service.
    pub fn new(roster: Roster, defaults: DefaultStaffing, store: S) -> Self {
        Self {
            roster,
            defaults,
            store,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Writes a default record for every assigned date without one.
    ///
    /// Existing records are left alone, so seeding never discards edits.
    /// Duty types without a default team are skipped. Returns the number of
    /// records written.
    pub fn seed(&mut self, report: &ScheduleReport) -> usize {
        let mut written = 0;
        for assignment in report.schedule.iter() {
            if self.store.get(assignment.date).is_some() {
                continue;
            }
            if let Some(team) = self.defaults.team(assignment.duty) {
                self.store.put(StaffingRecord {
                    date: assignment.date,
                    duty: assignment.duty,
                    personnel: team.clone(),
                });
                written += 1;
            }
        }
        info!(written, total = self.store.len(), "seeded staffing records");
        written
    }

    /// Who covers `date`: the stored record, else the computed owner with
    /// its default team. `None` if the date is a gap.
    pub fn coverage(&self, date: NaiveDate) -> Option<Coverage> {
        if let Some(record) = self.store.get(date) {
            return Some(Coverage {
                date,
                duty: record.duty,
                personnel: Some(record.personnel),
                stored: true,
            });
        }
        self.roster.owner_of(date).map(|a| Coverage {
            date,
            duty: a.duty,
            personnel: self.defaults.team(a.duty).cloned(),
            stored: false,
        })
    }

    /// Replaces the personnel of `date`, and with
    /// [`EditScope::ThisAndFuture`] of every later stored date with the
    /// same duty type. Returns the number of records written.
    ///
    /// # Errors
    /// `ScheduleGap` if no duty type owns `date` and nothing is stored for it.
    pub fn update(
        &mut self,
        date: NaiveDate,
        personnel: Personnel,
        scope: EditScope,
    ) -> Result<usize> {
        let duty = self
            .store
            .get(date)
            .map(|r| r.duty)
            .or_else(|| self.roster.owner_of(date).map(|a| a.duty))
            .ok_or(RosterError::ScheduleGap { date })?;

        self.store.put(StaffingRecord {
            date,
            duty,
            personnel: personnel.clone(),
        });
        let mut written = 1;

        if scope == EditScope::ThisAndFuture {
            for mut record in self.store.records_from(date) {
                if record.date == date || record.duty != duty {
                    continue;
                }
                record.personnel = personnel.clone();
                self.store.put(record);
                written += 1;
            }
        }

        debug!(%date, %duty, ?scope, written, "updated staffing");
        Ok(written)
    }
}
