//! Availability resolver.
//!
//! Members describe, per weekday, the time ranges they are free, in class,
//! busy or unavailable. Scheduling only ever consults ranges marked
//! `available`, and a requested window counts only when a single such range
//! covers it from start to end.
//!
//! Fail-closed: a member without a record, or with no record for the
//! requested weekday, is never available.

use crate::{
    calendar::DayOfWeek,
    clock::{ClockTime, TimeWindow},
    roster::Member,
    types::MemberId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    Available,
    InClass,
    Busy,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start:  ClockTime,
    pub end:    ClockTime,
    pub status: AvailabilityStatus,
    /// Free text, e.g. the institution for `in-class`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl TimeRange {
    pub fn new(window: TimeWindow, status: AvailabilityStatus) -> Self {
        Self { start: window.start, end: window.end, status, details: None }
    }

    /// Whether this range is marked free and covers all of `window`.
    /// Inverted ranges (start after end) never cover anything.
    pub fn covers(&self, window: &TimeWindow) -> bool {
        self.status == AvailabilityStatus::Available
            && self.start <= window.start
            && self.end >= window.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day:          DayOfWeek,
    pub is_available: bool,
    #[serde(default)]
    pub time_ranges:  Vec<TimeRange>,
}

/// Stored form of a member's availability: a list of day records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAvailability {
    pub member_id:    MemberId,
    pub availability: Vec<DayAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at:   Option<String>,
}

/// Lookup form: one optional slot per weekday, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyAvailability {
    days: [Option<DayAvailability>; 7],
}

impl WeeklyAvailability {
    /// Same `window` marked available on every Monday–Friday.
    pub fn weekdays(window: TimeWindow) -> Self {
        let mut week = Self::default();
        for day in DayOfWeek::ALL.into_iter().filter(|d| !d.is_weekend()) {
            week.set_day(DayAvailability {
                day,
                is_available: true,
                time_ranges:  vec![TimeRange::new(window, AvailabilityStatus::Available)],
            });
        }
        week
    }

    pub fn set_day(&mut self, record: DayAvailability) {
        let slot = record.day.index();
        self.days[slot] = Some(record);
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DayAvailability> {
        self.days[day.index()].as_ref()
    }

    pub fn is_available_on(&self, day: DayOfWeek, window: &TimeWindow) -> bool {
        match self.day(day) {
            Some(record) if record.is_available => {
                record.time_ranges.iter().any(|range| range.covers(window))
            }
            _ => false,
        }
    }
}

impl From<MemberAvailability> for WeeklyAvailability {
    fn from(stored: MemberAvailability) -> Self {
        let mut week = Self::default();
        for record in stored.availability {
            // First record for a day wins.
            if week.day(record.day).is_none() {
                week.set_day(record);
            }
        }
        week
    }
}

/// Availability of every member in a generation snapshot.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityBook {
    by_member: HashMap<MemberId, WeeklyAvailability>,
}

impl AvailabilityBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = MemberAvailability>) -> Self {
        let mut book = Self::new();
        for record in records {
            if book.by_member.contains_key(&record.member_id) {
                log::warn!(
                    "duplicate availability record for member '{}' ignored",
                    record.member_id
                );
                continue;
            }
            let member_id = record.member_id.clone();
            book.by_member.insert(member_id, record.into());
        }
        book
    }

    pub fn insert(&mut self, member_id: impl Into<MemberId>, week: WeeklyAvailability) {
        self.by_member.insert(member_id.into(), week);
    }

    pub fn get(&self, member_id: &str) -> Option<&WeeklyAvailability> {
        self.by_member.get(member_id)
    }

    pub fn has_record(&self, member_id: &str) -> bool {
        self.by_member.contains_key(member_id)
    }

    pub fn len(&self) -> usize {
        self.by_member.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_member.is_empty()
    }

    /// Whether `member_id` is free on `date` for the whole of `start..end`.
    pub fn is_available(
        &self,
        member_id: &str,
        date: NaiveDate,
        start: ClockTime,
        end: ClockTime,
    ) -> bool {
        self.is_available_for(member_id, date, &TimeWindow { start, end })
    }

    pub fn is_available_for(&self, member_id: &str, date: NaiveDate, window: &TimeWindow) -> bool {
        self.get(member_id)
            .is_some_and(|week| week.is_available_on(DayOfWeek::of(date), window))
    }

    /// Roster members that never configured their availability.
    pub fn members_without_availability<'m>(&self, members: &'m [Member]) -> Vec<&'m Member> {
        members.iter().filter(|m| !self.has_record(&m.id)).collect()
    }
}
