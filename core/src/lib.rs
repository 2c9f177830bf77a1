//! Office rotation scheduling core.
//!
//! Turns a roster snapshot (members bound to offices, office capacities,
//! weekly availability) into a batch of per-day attendance assignments.
//! Offices over capacity are split into shifts: a morning/afternoon split
//! when two shifts suffice, a full-day weekday rotation otherwise.
//!
//! Everything here is a pure function of its inputs except
//! `config::RosterData::load`, which reads a data directory.

pub mod availability;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod generator;
pub mod roster;
pub mod shift;
pub mod stats;
pub mod types;

pub use error::{ScheduleError, ScheduleResult};
pub use generator::{generate, RotationGenerator, ScheduleAssignment, ScheduleBatch};
