//! Roster snapshot types — members and offices as handed over by the
//! surrounding application.

use crate::{
    error::{ScheduleError, ScheduleResult},
    types::{MemberId, OfficeId},
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id:   MemberId,
    #[serde(default)]
    pub name: String,
    /// `None` or a blank id means the member has no office yet and cannot
    /// be scheduled.
    #[serde(default)]
    pub office_id: Option<OfficeId>,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, office_id: Option<&str>) -> Self {
        Self {
            id:        id.into(),
            name:      name.into(),
            office_id: office_id.map(String::from),
        }
    }

    /// Assigned office id, treating a blank id as unassigned.
    pub fn office(&self) -> Option<&str> {
        self.office_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    pub fn has_office(&self) -> bool {
        self.office().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub id:       OfficeId,
    #[serde(default)]
    pub name:     String,
    /// Seats available at the same time. Must be >= 1.
    pub capacity: u32,
    #[serde(default)]
    pub current_occupancy: u32,
    #[serde(default)]
    pub location: String,
}

impl Office {
    pub fn new(id: impl Into<OfficeId>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            current_occupancy: 0,
            location: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Index offices by id, rejecting duplicates and zero capacities.
pub fn index_offices(offices: &[Office]) -> ScheduleResult<HashMap<&str, &Office>> {
    let mut index = HashMap::with_capacity(offices.len());
    for office in offices {
        if office.capacity == 0 {
            return Err(ScheduleError::InvalidCapacity {
                office_id: office.id.clone(),
                capacity:  office.capacity,
            });
        }
        if index.insert(office.id.as_str(), office).is_some() {
            return Err(ScheduleError::DuplicateOffice { office_id: office.id.clone() });
        }
    }
    Ok(index)
}

/// Members without an office, in roster order.
pub fn members_without_office(members: &[Member]) -> Vec<&Member> {
    members.iter().filter(|m| !m.has_office()).collect()
}

/// Group office-bound members by office, preserving the roster order of both
/// the offices (first appearance) and the members inside each group.
pub fn group_by_office(members: &[Member]) -> Vec<(&str, Vec<&Member>)> {
    let mut groups: Vec<(&str, Vec<&Member>)> = Vec::new();
    let mut slot_of: HashMap<&str, usize> = HashMap::new();
    for member in members {
        let Some(office_id) = member.office() else { continue };
        let slot = *slot_of.entry(office_id).or_insert_with(|| {
            groups.push((office_id, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(member);
    }
    groups
}

/// Ids appearing more than once in the roster, each reported once.
pub fn duplicate_member_ids(members: &[Member]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    members
        .iter()
        .filter(|m| !seen.insert(m.id.as_str()) && reported.insert(m.id.as_str()))
        .map(|m| m.id.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let members = vec![
            Member::new("m1", "Ana", Some("lima")),
            Member::new("m2", "Luis", Some("cusco")),
            Member::new("m3", "Rosa", None),
            Member::new("m4", "Juan", Some("lima")),
        ];
        let groups = group_by_office(&members);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "lima");
        let lima: Vec<&str> = groups[0].1.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(lima, ["m1", "m4"]);
        assert_eq!(groups[1].0, "cusco");
    }

    #[test]
    fn blank_office_id_counts_as_unassigned() {
        let members = vec![
            Member::new("m1", "Ana", Some("lima")),
            Member::new("m2", "Luis", Some("")),
            Member::new("m3", "Rosa", Some("  ")),
        ];
        assert!(!members[1].has_office());
        assert_eq!(members[2].office(), None);
        let missing: Vec<&str> = members_without_office(&members).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(missing, ["m2", "m3"]);
        assert_eq!(group_by_office(&members).len(), 1);
    }

    #[test]
    fn index_rejects_zero_capacity_and_duplicates() {
        let zero = vec![Office::new("a", "A", 0)];
        assert!(matches!(
            index_offices(&zero),
            Err(ScheduleError::InvalidCapacity { capacity: 0, .. })
        ));

        let dup = vec![Office::new("a", "A", 2), Office::new("a", "A again", 3)];
        assert!(matches!(
            index_offices(&dup),
            Err(ScheduleError::DuplicateOffice { .. })
        ));
    }

    #[test]
    fn duplicate_ids_reported_once() {
        let members = vec![
            Member::new("m1", "", Some("x")),
            Member::new("m1", "", Some("x")),
            Member::new("m1", "", Some("x")),
            Member::new("m2", "", Some("x")),
        ];
        assert_eq!(duplicate_member_ids(&members), vec!["m1"]);
    }
}
