//! Calendar arithmetic for generation runs.
//!
//! A run covers `week_count` consecutive Monday–Friday weeks anchored at the
//! Monday of the week containing the generation date. Weekends are never
//! produced.

use crate::types::{WeekNumber, WORK_DAYS_PER_WEEK};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday key used by availability records, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Slot index, 0 = Monday .. 6 = Sunday.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    /// Short Spanish label used by the shift distribution view.
    pub fn short_label(self) -> &'static str {
        match self {
            DayOfWeek::Monday    => "Lun",
            DayOfWeek::Tuesday   => "Mar",
            DayOfWeek::Wednesday => "Mié",
            DayOfWeek::Thursday  => "Jue",
            DayOfWeek::Friday    => "Vie",
            DayOfWeek::Saturday  => "Sáb",
            DayOfWeek::Sunday    => "Dom",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(w: Weekday) -> Self {
        Self::ALL[w.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday    => "monday",
            DayOfWeek::Tuesday   => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday  => "thursday",
            DayOfWeek::Friday    => "friday",
            DayOfWeek::Saturday  => "saturday",
            DayOfWeek::Sunday    => "sunday",
        };
        f.write_str(name)
    }
}

/// Monday of the week containing `date`. A Sunday belongs to the week that
/// started six days earlier.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// One scheduled working day inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDay {
    /// 0-based week offset from the anchor.
    pub week_index: u32,
    /// 0 = Monday .. 4 = Friday.
    pub day_index:  u32,
    pub date:       NaiveDate,
}

impl WorkDay {
    /// Running day counter across weeks: `week_index * 5 + day_index`.
    pub fn absolute_index(&self) -> u32 {
        self.week_index * WORK_DAYS_PER_WEEK + self.day_index
    }

    pub fn week_number(&self) -> WeekNumber {
        self.week_index + 1
    }

    pub fn weekday(&self) -> DayOfWeek {
        DayOfWeek::ALL[self.day_index as usize]
    }
}

/// Every Monday–Friday date of `week_count` weeks starting at `anchor`,
/// in chronological order.
pub fn work_days(anchor: NaiveDate, week_count: u32) -> impl Iterator<Item = WorkDay> {
    (0..week_count).flat_map(move |week_index| {
        (0..WORK_DAYS_PER_WEEK).map(move |day_index| WorkDay {
            week_index,
            day_index,
            date: anchor + Duration::days((week_index * 7 + day_index) as i64),
        })
    })
}
