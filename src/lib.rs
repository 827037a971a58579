//! On-call duty rotation engine.
//!
//! Assigns every calendar day to exactly one of six rotating surgical duty
//! types, following deterministic cyclical patterns anchored to historical
//! start dates.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DutyType`, `Phase`, `FixedRotationSpec`,
//!   `FloatingRotationSpec`, `Assignment`, `ScheduleMap`, `DateRange`
//! - **`evaluator`**: Closed-form pattern evaluators and the `Roster`
//!   (point queries: who owns date X)
//! - **`scheduler`**: Range generation with conflict and gap diagnostics
//! - **`cycle`**: Weekday and week-of-cycle arithmetic
//! - **`config`**: TOML-loadable rotation constants
//! - **`validation`**: Configuration and horizon checks
//! - **`overrides`**: Personnel records layered on the computed schedule
//!
//! # Example
//!
//! ```
//! use duty_roster::evaluator::Roster;
//! use duty_roster::models::{DateRange, DutyType};
//! use duty_roster::scheduler::ScheduleGenerator;
//!
//! let report = ScheduleGenerator::new(Roster::default())
//!     .generate(DateRange::year(2025)?)?;
//! assert!(report.is_clean());
//!
//! let date = duty_roster::cycle::date(2025, 1, 2)?;
//! assert_eq!(report.schedule.duty_on(date), Some(DutyType::Thursday));
//! # Ok::<(), duty_roster::RosterError>(())
//! ```
//!
//! # Features
//!
//! - **`parallel`**: `ScheduleGenerator::generate_parallel` on a rayon pool.

pub mod config;
pub mod cycle;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod overrides;
pub mod scheduler;
pub mod validation;

pub use error::{Result, RosterError};
