//! Shared primitive types used across the scheduling core.

/// Stable identifier of a team member, as issued by the roster owner.
pub type MemberId = String;

/// Stable identifier of an office.
pub type OfficeId = String;

/// 1-based week number inside a generated batch.
pub type WeekNumber = u32;

/// Working days per scheduled week (Monday to Friday).
pub const WORK_DAYS_PER_WEEK: u32 = 5;
