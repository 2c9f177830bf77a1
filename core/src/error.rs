use crate::types::{MemberId, OfficeId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Every member needs an assigned office; missing for: {}", member_ids.join(", "))]
    MembersWithoutOffice { member_ids: Vec<MemberId> },

    #[error("No members with an assigned office to schedule")]
    EmptyRoster,

    #[error("Member '{member_id}' references unknown office '{office_id}'")]
    UnknownOffice { member_id: MemberId, office_id: OfficeId },

    #[error("Office '{office_id}' has invalid capacity {capacity} (must be >= 1)")]
    InvalidCapacity { office_id: OfficeId, capacity: u32 },

    #[error("Member '{member_id}' is listed more than once")]
    DuplicateMember { member_id: MemberId },

    #[error("Office '{office_id}' is listed more than once")]
    DuplicateOffice { office_id: OfficeId },

    #[error("Week count must be at least 1, got {0}")]
    InvalidWeekCount(u32),

    #[error("Invalid clock time '{value}': expected HH:mm")]
    InvalidClockTime { value: String },

    #[error("Invalid time window {start}-{end}: start must precede end")]
    InvalidTimeWindow { start: String, end: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
