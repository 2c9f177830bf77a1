//! Wall-clock primitives — `HH:mm` times of day and same-day windows.
//!
//! All times are local wall-clock, minute resolution, no timezone and no
//! DST handling. A window never crosses midnight.

use crate::error::{ScheduleError, ScheduleResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Build from hour and minute. Returns `None` outside 00:00..=23:59.
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { minutes: hour * 60 + minute })
        } else {
            None
        }
    }

    // Only for the compile-time constants below.
    const fn at(hour: u16, minute: u16) -> Self {
        Self { minutes: hour * 60 + minute }
    }

    pub fn hour(&self) -> u16   { self.minutes / 60 }
    pub fn minute(&self) -> u16 { self.minutes % 60 }
    pub fn minutes_since_midnight(&self) -> u16 { self.minutes }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> ScheduleResult<Self> {
        let invalid = || ScheduleError::InvalidClockTime { value: s.to_string() };
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;
    fn try_from(value: String) -> ScheduleResult<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A same-day interval `[start, end]` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end:   ClockTime,
}

impl TimeWindow {
    /// Full working day, 09:00–18:00.
    pub const FULL_DAY: TimeWindow = TimeWindow {
        start: ClockTime::at(9, 0),
        end:   ClockTime::at(18, 0),
    };
    /// Morning half of the split day, 09:00–13:00.
    pub const MORNING: TimeWindow = TimeWindow {
        start: ClockTime::at(9, 0),
        end:   ClockTime::at(13, 0),
    };
    /// Afternoon half of the split day, 14:00–18:00.
    pub const AFTERNOON: TimeWindow = TimeWindow {
        start: ClockTime::at(14, 0),
        end:   ClockTime::at(18, 0),
    };

    pub fn new(start: ClockTime, end: ClockTime) -> ScheduleResult<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidTimeWindow {
                start: start.to_string(),
                end:   end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse a window from two `HH:mm` strings.
    pub fn parse(start: &str, end: &str) -> ScheduleResult<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    /// Whether `other` lies entirely inside this window (bounds inclusive).
    pub fn contains(&self, other: &TimeWindow) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
