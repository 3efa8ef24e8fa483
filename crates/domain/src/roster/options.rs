//! Rendered `<option>` entries and the group dropdown

use serde::{Deserialize, Serialize};

use super::selection::TEACHERS_SENTINEL;
use crate::common::CollationKey;
use crate::GroupSummary;

/// Label of the first entry in the group dropdown
pub const CHOOSE_GROUP_LABEL: &str = "Выберите группу";

/// Label of the teacher sentinel entry in the group dropdown
pub const TEACHERS_GROUP_LABEL: &str = "Преподаватели";

/// One entry of a rendered `<select>`.
///
/// Placeholders always carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            selected: false,
        }
    }

    /// Zero-state entry ("choose a group first", "none found")
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    /// Pre-selected "please choose" header shown above real entries
    pub fn prompt(label: impl Into<String>, disabled: bool) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            disabled,
            selected: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Render the group dropdown: a leading prompt, the groups ordered by name,
/// and the teacher sentinel last when teachers can log in.
pub fn group_options(groups: &[GroupSummary], include_teachers: bool) -> Vec<SelectOption> {
    let mut sorted: Vec<&GroupSummary> = groups.iter().collect();
    sorted.sort_by_cached_key(|g| CollationKey::new(&g.name));

    let mut options = Vec::with_capacity(sorted.len() + 2);
    options.push(SelectOption::placeholder(CHOOSE_GROUP_LABEL));
    options.extend(
        sorted
            .into_iter()
            .map(|g| SelectOption::new(g.id.to_string(), g.name.clone())),
    );
    if include_teachers {
        options.push(SelectOption::new(TEACHERS_SENTINEL, TEACHERS_GROUP_LABEL));
    }
    options
}
