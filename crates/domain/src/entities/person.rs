//! Person entity - A student or teacher as delivered with the login page

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{non_empty, OptionStringExt};

/// Which roster a person belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    #[default]
    Student,
    Teacher,
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Teacher => write!(f, "teacher"),
        }
    }
}

/// A person that can be picked in the username list.
///
/// Produced by the server; never modified on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub full_name: String,
    /// Student ticket number; teachers have none
    pub identifier: Option<String>,
    pub role: PersonRole,
}

impl PersonRecord {
    pub fn student(full_name: impl Into<String>, ticket_number: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            identifier: non_empty(Some(ticket_number.into())),
            role: PersonRole::Student,
        }
    }

    pub fn teacher(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            identifier: None,
            role: PersonRole::Teacher,
        }
    }

    /// Student with no ticket number on file
    pub fn unticketed_student(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            identifier: None,
            role: PersonRole::Student,
        }
    }

    pub fn is_teacher(&self) -> bool {
        self.role == PersonRole::Teacher
    }

    /// Value submitted as the login username.
    ///
    /// Students log in with their ticket number, teachers with their full
    /// name. An empty result means the person cannot be selected.
    pub fn login_value(&self) -> &str {
        match self.role {
            PersonRole::Teacher => &self.full_name,
            PersonRole::Student => self.identifier.as_str_or_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_login_value_is_ticket() {
        let p = PersonRecord::student("Иванов Иван", "001");
        assert_eq!(p.login_value(), "001");
        assert!(!p.is_teacher());
    }

    #[test]
    fn empty_ticket_becomes_none() {
        let p = PersonRecord::student("Иванов Иван", "");
        assert_eq!(p.identifier, None);
        assert_eq!(p.login_value(), "");
    }

    #[test]
    fn teacher_login_value_is_full_name() {
        let p = PersonRecord::teacher("Смирнова Анна Петровна");
        assert_eq!(p.login_value(), "Смирнова Анна Петровна");
        assert!(p.is_teacher());
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&PersonRole::Teacher).expect("serialize");
        assert_eq!(json, "\"teacher\"");
    }
}
