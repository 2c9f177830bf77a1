//! Run events — what happened during one generation run.
//!
//! The generator never notifies anyone itself. It records events on the
//! batch and the caller decides how to surface them (toast, log, mail).

use crate::{
    shift::ShiftScheme,
    types::{MemberId, OfficeId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Variants are append-only; consumers match on `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleEvent {
    RunStarted {
        anchor:     NaiveDate,
        week_count: u32,
    },

    // ── Per office ─────────────────────────────────
    OfficeWithinCapacity {
        office_id:    OfficeId,
        member_count: usize,
        capacity:     u32,
    },
    RotationPlanned {
        office_id:    OfficeId,
        member_count: usize,
        capacity:     u32,
        scheme:       ShiftScheme,
        labels:       Vec<String>,
    },

    // ── Diagnostics ────────────────────────────────
    MembersExcluded {
        member_ids: Vec<MemberId>,
    },
    PartialCoverage {
        member_ids: Vec<MemberId>,
    },

    RunCompleted {
        assignment_count: usize,
        scheduled_members: usize,
    },
}

impl ScheduleEvent {
    /// Stable name of the variant, matching the serialized `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScheduleEvent::RunStarted { .. }           => "run_started",
            ScheduleEvent::OfficeWithinCapacity { .. } => "office_within_capacity",
            ScheduleEvent::RotationPlanned { .. }      => "rotation_planned",
            ScheduleEvent::MembersExcluded { .. }      => "members_excluded",
            ScheduleEvent::PartialCoverage { .. }      => "partial_coverage",
            ScheduleEvent::RunCompleted { .. }         => "run_completed",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            ScheduleEvent::MembersExcluded { .. } | ScheduleEvent::PartialCoverage { .. }
        )
    }
}
