//! Rotation schedule generator.
//!
//! PIPELINE (one run, pure, no I/O):
//!   1. Validate week count, office table and member ids.
//!   2. Handle members without an office (refuse or exclude).
//!   3. Group members by office, resolve every office up front.
//!   4. Per office: plan shifts, walk Mon–Fri of every week, ask the
//!      availability book for each member's shift window, emit records.
//!   5. Report office-bound members that received nothing.
//!
//! A failed precondition returns an error and no batch. A slot that fails
//! the availability check is dropped without a trace in the batch.

use crate::{
    availability::AvailabilityBook,
    calendar::{monday_of, work_days, WorkDay},
    clock::ClockTime,
    config::GeneratorConfig,
    error::{ScheduleError, ScheduleResult},
    event::ScheduleEvent,
    roster::{self, Member, Office},
    shift::{ShiftPlan, WorkMode},
    types::{MemberId, OfficeId, WeekNumber},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAssignment {
    pub member_id:   MemberId,
    pub office_id:   OfficeId,
    pub date:        NaiveDate,
    pub start_time:  ClockTime,
    pub end_time:    ClockTime,
    pub week_number: WeekNumber,
    pub work_mode:   WorkMode,
    pub shift:       String,
}

/// Output of one run: a complete, standalone batch for the requested weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBatch {
    /// Monday of the first scheduled week.
    pub anchor:             NaiveDate,
    pub week_count:         u32,
    pub assignments:        Vec<ScheduleAssignment>,
    /// Office-bound members with zero assignments in the whole run.
    pub unassigned_members: Vec<Member>,
    /// Members left out for lacking an office (relaxed mode only).
    pub excluded_members:   Vec<Member>,
    pub events:             Vec<ScheduleEvent>,
}

impl ScheduleBatch {
    /// True when at least one office-bound member got no assignment.
    pub fn has_partial_coverage(&self) -> bool {
        !self.unassigned_members.is_empty()
    }

    pub fn assignments_for<'a>(
        &'a self,
        member_id: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleAssignment> + 'a {
        self.assignments.iter().filter(move |a| a.member_id == member_id)
    }

    /// Distinct members that received at least one assignment.
    pub fn scheduled_member_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|a| a.member_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

pub struct RotationGenerator {
    config: GeneratorConfig,
}

impl RotationGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one generation anchored at the Monday of `today`'s week.
    pub fn generate(
        &self,
        members: &[Member],
        offices: &[Office],
        availability: &AvailabilityBook,
        today: NaiveDate,
    ) -> ScheduleResult<ScheduleBatch> {
        let week_count = self.config.week_count;
        if week_count == 0 {
            return Err(ScheduleError::InvalidWeekCount(week_count));
        }
        let office_index = roster::index_offices(offices)?;
        if let Some(id) = roster::duplicate_member_ids(members).first() {
            return Err(ScheduleError::DuplicateMember { member_id: id.to_string() });
        }
        let anchor = monday_of(today);
        let mut events = vec![ScheduleEvent::RunStarted { anchor, week_count }];

        // ── Members without an office ──────────────────────────────
        let no_office = roster::members_without_office(members);
        if !no_office.is_empty() && self.config.strict_office_assignment {
            return Err(ScheduleError::MembersWithoutOffice {
                member_ids: no_office.iter().map(|m| m.id.clone()).collect(),
            });
        }
        let excluded_members: Vec<Member> = no_office.into_iter().cloned().collect();
        if !excluded_members.is_empty() {
            log::warn!(
                "{} member(s) without an office excluded from scheduling",
                excluded_members.len()
            );
            events.push(ScheduleEvent::MembersExcluded {
                member_ids: excluded_members.iter().map(|m| m.id.clone()).collect(),
            });
        }

        // ── Resolve offices before producing anything ──────────────
        let groups = roster::group_by_office(members);
        if groups.is_empty() {
            return Err(ScheduleError::EmptyRoster);
        }
        let mut plans = Vec::with_capacity(groups.len());
        for (office_id, office_members) in &groups {
            let office = office_index.get(office_id).copied().ok_or_else(|| {
                ScheduleError::UnknownOffice {
                    member_id: office_members[0].id.clone(),
                    office_id: office_id.to_string(),
                }
            })?;
            plans.push(ShiftPlan::build(office, office_members));
        }

        // ── Emit assignments office by office ──────────────────────
        let days: Vec<WorkDay> = work_days(anchor, week_count).collect();
        let mut assignments = Vec::new();
        for plan in &plans {
            events.push(plan_event(plan));
            emit_office(plan, &days, availability, &mut assignments);
        }

        // ── Coverage diagnostics ───────────────────────────────────
        let scheduled: HashSet<&str> =
            assignments.iter().map(|a| a.member_id.as_str()).collect();
        let unassigned_members: Vec<Member> = members
            .iter()
            .filter(|m| m.has_office() && !scheduled.contains(m.id.as_str()))
            .cloned()
            .collect();

        if !unassigned_members.is_empty() {
            log::warn!(
                "{} member(s) received no assignment: missing or insufficient availability",
                unassigned_members.len()
            );
            events.push(ScheduleEvent::PartialCoverage {
                member_ids: unassigned_members.iter().map(|m| m.id.clone()).collect(),
            });
        }

        events.push(ScheduleEvent::RunCompleted {
            assignment_count:  assignments.len(),
            scheduled_members: scheduled.len(),
        });
        log::info!(
            "Generated {} assignment(s) for {} member(s) over {week_count} week(s) from {anchor}",
            assignments.len(),
            scheduled.len(),
        );

        Ok(ScheduleBatch {
            anchor,
            week_count,
            assignments,
            unassigned_members,
            excluded_members,
            events,
        })
    }
}

/// Generate `week_count` weeks from the Monday of `today` with default policy.
pub fn generate(
    members: &[Member],
    offices: &[Office],
    availability: &AvailabilityBook,
    week_count: u32,
    today: NaiveDate,
) -> ScheduleResult<ScheduleBatch> {
    RotationGenerator::new(GeneratorConfig::default().with_weeks(week_count))
        .generate(members, offices, availability, today)
}

fn plan_event(plan: &ShiftPlan<'_>) -> ScheduleEvent {
    let office = plan.office;
    let member_count = plan.member_count();
    if plan.scheme.needs_rotation() {
        log::debug!(
            "office={} rotation: {} members / {} seats -> {:?}",
            office.id, member_count, office.capacity, plan.scheme
        );
        ScheduleEvent::RotationPlanned {
            office_id: office.id.clone(),
            member_count,
            capacity: office.capacity,
            scheme: plan.scheme,
            labels: plan.shifts.iter().map(|s| s.label.clone()).collect(),
        }
    } else {
        log::debug!(
            "office={} within capacity: {} members / {} seats",
            office.id, member_count, office.capacity
        );
        ScheduleEvent::OfficeWithinCapacity {
            office_id: office.id.clone(),
            member_count,
            capacity: office.capacity,
        }
    }
}

fn emit_office(
    plan: &ShiftPlan<'_>,
    days: &[WorkDay],
    availability: &AvailabilityBook,
    out: &mut Vec<ScheduleAssignment>,
) {
    for day in days {
        for (index, shift) in plan.shifts.iter().enumerate() {
            let window = plan.window(index);
            let work_mode = plan.work_mode(index, day);
            for member in &shift.members {
                if !availability.is_available_for(&member.id, day.date, &window) {
                    log::trace!("skip {} on {} ({window})", member.id, day.date);
                    continue;
                }
                out.push(ScheduleAssignment {
                    member_id:   member.id.clone(),
                    office_id:   plan.office.id.clone(),
                    date:        day.date,
                    start_time:  window.start,
                    end_time:    window.end,
                    week_number: day.week_number(),
                    work_mode,
                    shift:       shift.label.clone(),
                });
            }
        }
    }
}
