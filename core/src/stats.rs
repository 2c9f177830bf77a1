//! Office capacity statistics and the per-shift distribution view.
//!
//! Both views are informational: they reuse the generator's partitioning
//! rules but never fail. Members pointing at an unknown office are skipped.

use crate::{
    roster::{self, Member, Office},
    shift::{ShiftPlan, ShiftScheme, SINGLE_SHIFT_LABEL},
    types::MemberId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeStats {
    pub office:              Office,
    pub member_count:        usize,
    pub member_ids:          Vec<MemberId>,
    pub needs_rotation:      bool,
    pub shifts_needed:       u32,
    /// Headcount over capacity, in percent. 0 for a zero-capacity office.
    pub utilization_percent: f64,
    /// Seats each shift fills at most.
    pub members_per_shift:   usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub label:      String,
    pub member_ids: Vec<MemberId>,
    /// On-site days of the first week, e.g. `["Lun", "Jue"]` or
    /// `["Lun (Mañana)", ...]` for the split day.
    pub days:       Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeDistribution {
    pub office_id:      String,
    pub office_name:    String,
    pub needs_rotation: bool,
    pub shifts:         Vec<ShiftSummary>,
}

fn known_groups<'a>(
    members: &'a [Member],
    offices: &'a [Office],
) -> Vec<(&'a Office, Vec<&'a Member>)> {
    let by_id: HashMap<&str, &Office> = offices.iter().map(|o| (o.id.as_str(), o)).collect();
    roster::group_by_office(members)
        .into_iter()
        .filter_map(|(office_id, group)| by_id.get(office_id).map(|office| (*office, group)))
        .collect()
}

/// Per-office headcount against capacity, offices in roster order.
pub fn office_stats(members: &[Member], offices: &[Office]) -> Vec<OfficeStats> {
    known_groups(members, offices)
        .into_iter()
        .map(|(office, group)| {
            let member_count = group.len();
            let scheme = ShiftScheme::for_headcount(member_count, office.capacity);
            let shifts_needed = scheme.shift_count();
            let utilization_percent = if office.capacity > 0 {
                member_count as f64 / office.capacity as f64 * 100.0
            } else {
                0.0
            };
            OfficeStats {
                office: office.clone(),
                member_count,
                member_ids: group.iter().map(|m| m.id.clone()).collect(),
                needs_rotation: scheme.needs_rotation(),
                shifts_needed,
                utilization_percent,
                members_per_shift: member_count.div_ceil(shifts_needed as usize),
            }
        })
        .collect()
}

/// Which members sit in which shift and which days each shift is on site.
pub fn shift_distribution(members: &[Member], offices: &[Office]) -> Vec<OfficeDistribution> {
    known_groups(members, offices)
        .into_iter()
        .map(|(office, group)| {
            let plan = ShiftPlan::build(office, &group);
            let shifts = plan
                .shifts
                .iter()
                .enumerate()
                .map(|(index, shift)| {
                    let days = plan
                        .first_week_days(index)
                        .into_iter()
                        .map(|day| match plan.scheme {
                            ShiftScheme::HalfDay => format!("{} ({})", day.short_label(), shift.label),
                            _ => day.short_label().to_string(),
                        })
                        .collect();
                    ShiftSummary {
                        label: shift.label.clone(),
                        member_ids: shift.members.iter().map(|m| m.id.clone()).collect(),
                        days,
                    }
                })
                .collect();
            OfficeDistribution {
                office_id:      office.id.clone(),
                office_name:    office.name.clone(),
                needs_rotation: plan.scheme.needs_rotation(),
                shifts,
            }
        })
        .collect()
}

/// Whether the distribution entry is the trivial single-shift case.
pub fn is_single_shift(distribution: &OfficeDistribution) -> bool {
    distribution.shifts.len() == 1 && distribution.shifts[0].label == SINGLE_SHIFT_LABEL
}
