//! Shift planning for a single office.
//!
//! RULES:
//!   - n <= capacity        → one "Único" shift, on site every work day.
//!   - ceil(n/capacity) == 2 → "Mañana"/"Tarde" half-day split, both on
//!                             site every work day.
//!   - otherwise            → full-day rotation: shift i is on site on
//!                             absolute day d iff d % shifts == i.
//!   - member k (roster order) joins shift k % shifts.
//!
//! Round-robin keeps shift sizes within one of each other, so no shift is
//! ever larger than the office capacity.

use crate::{
    calendar::{DayOfWeek, WorkDay},
    clock::TimeWindow,
    roster::{Member, Office},
    types::WORK_DAYS_PER_WEEK,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SINGLE_SHIFT_LABEL: &str = "Único";
pub const MORNING_LABEL: &str = "Mañana";
pub const AFTERNOON_LABEL: &str = "Tarde";
const ROTATION_LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Presencial,
    Remoto,
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkMode::Presencial => "presencial",
            WorkMode::Remoto     => "remoto",
        })
    }
}

/// How an office's members are spread over the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftScheme {
    /// Everyone fits: one shift, full day, every day.
    Single,
    /// Two shifts splitting the day, both every day.
    HalfDay,
    /// `shifts` full-day shifts taking turns over the work days. Always
    /// three or more; one and two shifts are `Single` and `HalfDay`.
    Rotation { shifts: u32 },
}

impl ShiftScheme {
    pub fn for_headcount(member_count: usize, capacity: u32) -> Self {
        if member_count <= capacity as usize {
            return ShiftScheme::Single;
        }
        match shifts_needed(member_count, capacity) {
            2 => ShiftScheme::HalfDay,
            shifts => ShiftScheme::Rotation { shifts },
        }
    }

    pub fn shift_count(&self) -> u32 {
        match self {
            ShiftScheme::Single             => 1,
            ShiftScheme::HalfDay            => 2,
            ShiftScheme::Rotation { shifts } => *shifts,
        }
    }

    pub fn needs_rotation(&self) -> bool {
        !matches!(self, ShiftScheme::Single)
    }
}

/// `ceil(member_count / capacity)`, at least 1. `capacity` must be >= 1.
pub fn shifts_needed(member_count: usize, capacity: u32) -> u32 {
    let capacity = capacity.max(1) as usize;
    member_count.div_ceil(capacity).max(1) as u32
}

/// Label of shift `index` (0-based) under `scheme`. Past the named
/// rotation labels shifts are numbered `"Turno N"`.
pub fn label_for(index: usize, scheme: ShiftScheme) -> String {
    match scheme {
        ShiftScheme::Single => SINGLE_SHIFT_LABEL.to_string(),
        ShiftScheme::HalfDay if index == 0 => MORNING_LABEL.to_string(),
        ShiftScheme::HalfDay => AFTERNOON_LABEL.to_string(),
        ShiftScheme::Rotation { .. } => match ROTATION_LABELS.get(index) {
            Some(label) => label.to_string(),
            None => format!("Turno {}", index + 1),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift<'a> {
    pub label:        String,
    pub members:      Vec<&'a Member>,
    pub is_morning:   bool,
    pub is_afternoon: bool,
}

/// Shifts of one office for one generation run.
#[derive(Debug, Clone)]
pub struct ShiftPlan<'a> {
    pub office: &'a Office,
    pub scheme: ShiftScheme,
    pub shifts: Vec<Shift<'a>>,
}

impl<'a> ShiftPlan<'a> {
    /// Partition `members` (already filtered to `office`, roster order).
    pub fn build(office: &'a Office, members: &[&'a Member]) -> Self {
        let scheme = ShiftScheme::for_headcount(members.len(), office.capacity);
        let count = scheme.shift_count() as usize;

        let mut shifts: Vec<Shift<'a>> = (0..count)
            .map(|i| Shift {
                label:        label_for(i, scheme),
                members:      Vec::new(),
                is_morning:   scheme == ShiftScheme::HalfDay && i == 0,
                is_afternoon: scheme == ShiftScheme::HalfDay && i == 1,
            })
            .collect();

        for (k, member) in members.iter().enumerate() {
            shifts[k % count].members.push(*member);
        }

        Self { office, scheme, shifts }
    }

    pub fn member_count(&self) -> usize {
        self.shifts.iter().map(|s| s.members.len()).sum()
    }

    /// Hours shift `index` is expected on any of its days.
    pub fn window(&self, index: usize) -> TimeWindow {
        let shift = &self.shifts[index];
        if shift.is_morning {
            TimeWindow::MORNING
        } else if shift.is_afternoon {
            TimeWindow::AFTERNOON
        } else {
            TimeWindow::FULL_DAY
        }
    }

    /// Whether shift `index` works on site on `day`.
    pub fn work_mode(&self, index: usize, day: &WorkDay) -> WorkMode {
        match self.scheme {
            ShiftScheme::Single | ShiftScheme::HalfDay => WorkMode::Presencial,
            ShiftScheme::Rotation { shifts } => {
                if day.absolute_index() % shifts == index as u32 {
                    WorkMode::Presencial
                } else {
                    WorkMode::Remoto
                }
            }
        }
    }

    /// On-site weekdays of shift `index` in the first week of a run.
    pub fn first_week_days(&self, index: usize) -> Vec<DayOfWeek> {
        (0..WORK_DAYS_PER_WEEK)
            .filter(|d| match self.scheme {
                ShiftScheme::Rotation { shifts } => d % shifts == index as u32,
                _ => true,
            })
            .map(|d| DayOfWeek::ALL[d as usize])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<Member> {
        (0..n).map(|i| Member::new(format!("m{i}"), "", Some("hq"))).collect()
    }

    #[test]
    fn scheme_selection_by_headcount() {
        assert_eq!(ShiftScheme::for_headcount(3, 5), ShiftScheme::Single);
        assert_eq!(ShiftScheme::for_headcount(5, 5), ShiftScheme::Single);
        assert_eq!(ShiftScheme::for_headcount(8, 4), ShiftScheme::HalfDay);
        assert_eq!(ShiftScheme::for_headcount(6, 4), ShiftScheme::HalfDay);
        assert_eq!(ShiftScheme::for_headcount(7, 3), ShiftScheme::Rotation { shifts: 3 });
        assert_eq!(ShiftScheme::for_headcount(15, 1), ShiftScheme::Rotation { shifts: 15 });

        for capacity in 1..=6u32 {
            for members in 0..=40usize {
                if let ShiftScheme::Rotation { shifts } = ShiftScheme::for_headcount(members, capacity) {
                    assert!(shifts >= 3, "{members}/{capacity} gave {shifts} rotating shifts");
                }
            }
        }
    }

    #[test]
    fn labels_fall_back_past_named_list() {
        let rotation = ShiftScheme::Rotation { shifts: 8 };
        assert_eq!(label_for(0, rotation), "A");
        assert_eq!(label_for(5, rotation), "F");
        assert_eq!(label_for(6, rotation), "Turno 7");
        assert_eq!(label_for(7, rotation), "Turno 8");
        assert_eq!(label_for(0, ShiftScheme::HalfDay), "Mañana");
        assert_eq!(label_for(1, ShiftScheme::HalfDay), "Tarde");
        assert_eq!(label_for(0, ShiftScheme::Single), "Único");
    }

    #[test]
    fn round_robin_partition_sizes() {
        let members = roster(7);
        let refs: Vec<&Member> = members.iter().collect();
        let office = Office::new("hq", "HQ", 3);
        let plan = ShiftPlan::build(&office, &refs);

        let sizes: Vec<usize> = plan.shifts.iter().map(|s| s.members.len()).collect();
        assert_eq!(sizes, [3, 2, 2]);
        assert_eq!(plan.shifts[0].members[1].id, "m3");
        assert_eq!(plan.member_count(), 7);
        assert!(plan.shifts.iter().all(|s| s.members.len() <= office.capacity as usize));
    }

    #[test]
    fn half_day_windows() {
        let members = roster(8);
        let refs: Vec<&Member> = members.iter().collect();
        let office = Office::new("hq", "HQ", 4);
        let plan = ShiftPlan::build(&office, &refs);

        assert_eq!(plan.window(0), TimeWindow::MORNING);
        assert_eq!(plan.window(1), TimeWindow::AFTERNOON);
        assert_eq!(plan.first_week_days(1).len(), 5);
    }

    #[test]
    fn rotation_first_week_days() {
        let members = roster(7);
        let refs: Vec<&Member> = members.iter().collect();
        let office = Office::new("hq", "HQ", 3);
        let plan = ShiftPlan::build(&office, &refs);

        assert_eq!(plan.first_week_days(0), [DayOfWeek::Monday, DayOfWeek::Thursday]);
        assert_eq!(plan.first_week_days(1), [DayOfWeek::Tuesday, DayOfWeek::Friday]);
        assert_eq!(plan.first_week_days(2), [DayOfWeek::Wednesday]);
    }
}
