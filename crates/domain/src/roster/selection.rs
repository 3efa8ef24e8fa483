//! Group and person selection state

use crate::{GroupId, SelectOption};

/// Reserved `<select>` value that switches the person list to teachers
pub const TEACHERS_SENTINEL: &str = "teachers";

/// How a raw group `<select>` value is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelection {
    /// Nothing chosen yet
    Empty,
    /// The teacher sentinel (only with role support)
    Teachers,
    /// A syntactically valid group id; it may still be unknown
    Group(GroupId),
    /// Not a number and not an accepted sentinel
    Unresolvable(String),
}

impl GroupSelection {
    pub fn parse(raw: &str, role_support: bool) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        if role_support && raw == TEACHERS_SENTINEL {
            return Self::Teachers;
        }
        match GroupId::coerce(raw) {
            Some(id) => Self::Group(id),
            None => Self::Unresolvable(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Transient login form selection. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    group: String,
    person: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    /// Record a new group value. Any chosen person belonged to the old list
    /// and is cleared.
    pub fn choose_group(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        if raw != self.group {
            self.person.clear();
        }
        self.group = raw;
    }

    pub fn choose_person(&mut self, value: impl Into<String>) {
        self.person = value.into();
    }

    /// Drop the chosen person if it is no longer among the selectable options.
    pub fn reconcile(&mut self, options: &[SelectOption]) {
        if self.person.is_empty() {
            return;
        }
        let still_present = options
            .iter()
            .any(|o| !o.disabled && !o.value.is_empty() && o.value == self.person);
        if !still_present {
            self.person.clear();
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.group.is_empty() && !self.person.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty() {
        assert_eq!(GroupSelection::parse("", true), GroupSelection::Empty);
    }

    #[test]
    fn parse_teachers_requires_role_support() {
        assert_eq!(
            GroupSelection::parse("teachers", true),
            GroupSelection::Teachers
        );
        assert_eq!(
            GroupSelection::parse("teachers", false),
            GroupSelection::Unresolvable("teachers".to_string())
        );
    }

    #[test]
    fn parse_group_uses_integer_coercion() {
        assert_eq!(
            GroupSelection::parse("12abc", false),
            GroupSelection::Group(GroupId::new(12))
        );
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert_eq!(
            GroupSelection::parse(" ", false),
            GroupSelection::Unresolvable(" ".to_string())
        );
    }

    #[test]
    fn changing_group_clears_person() {
        let mut state = SelectionState::new();
        state.choose_group("1");
        state.choose_person("001");
        assert!(state.is_complete());

        state.choose_group("1");
        assert_eq!(state.person(), "001");

        state.choose_group("2");
        assert_eq!(state.person(), "");
        assert!(!state.is_complete());
    }

    #[test]
    fn reconcile_drops_missing_person() {
        let mut state = SelectionState::new();
        state.choose_group("1");
        state.choose_person("003");

        state.reconcile(&[SelectOption::new("001", "Иванов Иван")]);
        assert_eq!(state.person(), "");
    }

    #[test]
    fn reconcile_keeps_present_person() {
        let mut state = SelectionState::new();
        state.choose_group("1");
        state.choose_person("001");

        state.reconcile(&[
            SelectOption::prompt("Выберите студента", true),
            SelectOption::new("001", "Иванов Иван"),
        ]);
        assert_eq!(state.person(), "001");
    }
}
