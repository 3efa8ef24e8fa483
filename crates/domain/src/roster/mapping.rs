//! Roster mapping - who is in which group

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{GroupId, PersonRecord};

/// Group id → students, plus the optional flat teacher list.
///
/// Passed explicitly to the selector instead of being read from page
/// globals, so rendering never depends on script load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMapping {
    students: BTreeMap<GroupId, Vec<PersonRecord>>,
    teachers: Option<Vec<PersonRecord>>,
}

impl RosterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the members of one group
    pub fn with_group(mut self, group_id: GroupId, members: Vec<PersonRecord>) -> Self {
        self.students.insert(group_id, members);
        self
    }

    pub fn with_teachers(mut self, teachers: Vec<PersonRecord>) -> Self {
        self.teachers = Some(teachers);
        self
    }

    pub fn insert_group(&mut self, group_id: GroupId, members: Vec<PersonRecord>) {
        self.students.insert(group_id, members);
    }

    pub fn set_teachers(&mut self, teachers: Vec<PersonRecord>) {
        self.teachers = Some(teachers);
    }

    /// Members of a group; `None` when the group is not in the mapping
    pub fn students_in(&self, group_id: GroupId) -> Option<&[PersonRecord]> {
        self.students.get(&group_id).map(Vec::as_slice)
    }

    /// Teacher list; `None` when the page did not ship one
    pub fn teachers(&self) -> Option<&[PersonRecord]> {
        self.teachers.as_deref()
    }

    pub fn group_count(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.teachers.as_ref().map_or(true, Vec::is_empty)
    }
}
