//! Group entity - A study group shown in the group dropdown

use serde::{Deserialize, Serialize};

use crate::GroupId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id: GroupId,
    pub name: String,
    pub speciality_code: Option<String>,
}

impl GroupSummary {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            speciality_code: None,
        }
    }

    pub fn with_speciality_code(mut self, code: impl Into<String>) -> Self {
        self.speciality_code = Some(code.into());
        self
    }
}
