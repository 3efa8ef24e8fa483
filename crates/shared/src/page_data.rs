//! Page-embedded roster data
//!
//! Shapes follow what the server templates inline:
//!
//! ```json
//! {
//!   "studentsMap": { "1": [{ "fullName": "Иванов Иван", "studentTicketNumber": "001" }] },
//!   "teachers": [{ "fullName": "Смирнова Анна" }],
//!   "groups": [{ "id": 1, "name": "ИС-22", "specialityCode": "09.02.07" }],
//!   "errorMessage": "Неверные учетные данные"
//! }
//! ```
//!
//! Dashboard pages ship `"page": "dashboard"` plus the semester menu data:
//!
//! ```json
//! { "page": "dashboard", "availableSemesters": [1, 2, 3], "currentSemester": 3 }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use rollcall_domain::common::non_empty;
use rollcall_domain::{BannerKind, GroupId, GroupSummary, PersonRecord, PersonRole, RosterMapping};

use crate::ContractError;

/// One entry of `studentsMap[groupId]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentData {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub student_ticket_number: Option<String>,
}

/// One entry of `teachers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherData {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// One entry of `groups`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupData {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub speciality_code: Option<String>,
}

/// Semesters offered when the student has no graded or attended subjects yet
pub const DEFAULT_SEMESTERS: [u32; 2] = [1, 2];

/// Which server template the page was rendered from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Login,
    Dashboard,
}

impl PageKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Вход в систему",
            Self::Dashboard => "Личный кабинет",
        }
    }
}

impl std::str::FromStr for PageKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "dashboard" => Ok(Self::Dashboard),
            other => Err(ContractError::source_unavailable(format!(
                "unknown page kind: {other}"
            ))),
        }
    }
}

/// One-shot messages the server attaches to a page render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashMessages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    /// Neutral notice, e.g. after logout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FlashMessages {
    /// Banners to show, errors first. Blank messages are dropped.
    pub fn banners(&self) -> Vec<(BannerKind, String)> {
        [
            (BannerKind::Error, &self.error_message),
            (BannerKind::Success, &self.success_message),
            (BannerKind::Success, &self.message),
        ]
        .into_iter()
        .filter_map(|(kind, text)| {
            text.as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| (kind, t.to_string()))
        })
        .collect()
    }
}

/// Everything a page ships for the portal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: PageKind,
    /// Keys are group ids rendered as strings; `null` lists are allowed
    #[serde(default, deserialize_with = "null_as_default")]
    pub students_map: BTreeMap<String, Option<Vec<StudentData>>>,
    #[serde(default)]
    pub teachers: Option<Vec<TeacherData>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<GroupData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_semesters: Vec<u32>,
    #[serde(default)]
    pub current_semester: Option<u32>,
    #[serde(flatten)]
    pub flash: FlashMessages,
}

/// Java serialises absent collections as `null`; read it like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PageData {
    pub fn from_json(json: &str) -> Result<Self, ContractError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ContractError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Build the roster mapping. Keys that are not canonical integers
    /// (`"1"`, not `"01"` or `" 1"`) are skipped; the login page looks groups
    /// up by the canonical form only.
    pub fn roster(&self) -> RosterMapping {
        let mut mapping = RosterMapping::new();

        for (key, students) in &self.students_map {
            let Ok(id) = key.parse::<i64>() else {
                tracing::warn!(key = %key, "Skipping studentsMap entry with non-integer key");
                continue;
            };
            if id.to_string() != *key {
                tracing::warn!(key = %key, "Skipping studentsMap entry with non-canonical key");
                continue;
            }
            let members = students
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(StudentData::to_person)
                .collect();
            mapping.insert_group(GroupId::new(id), members);
        }

        if let Some(teachers) = &self.teachers {
            mapping.set_teachers(teachers.iter().map(TeacherData::to_person).collect());
        }

        tracing::debug!(
            groups = mapping.group_count(),
            has_teachers = self.teachers.is_some(),
            "Roster mapping built from page data"
        );
        mapping
    }

    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        self.groups.iter().map(GroupData::to_summary).collect()
    }

    /// Semester menu entries, ascending and deduplicated
    pub fn semesters(&self) -> Vec<u32> {
        let mut semesters = self.available_semesters.clone();
        semesters.sort_unstable();
        semesters.dedup();
        if semesters.is_empty() {
            return DEFAULT_SEMESTERS.to_vec();
        }
        semesters
    }

    /// Whether the page offers teacher login
    pub fn has_teachers(&self) -> bool {
        self.teachers.is_some()
    }
}

impl StudentData {
    pub fn to_person(&self) -> PersonRecord {
        PersonRecord {
            full_name: self.full_name.clone().unwrap_or_default(),
            identifier: non_empty(self.student_ticket_number.clone()),
            role: PersonRole::Student,
        }
    }
}

impl TeacherData {
    pub fn to_person(&self) -> PersonRecord {
        PersonRecord::teacher(self.full_name.clone().unwrap_or_default())
    }
}

impl GroupData {
    pub fn to_summary(&self) -> GroupSummary {
        GroupSummary {
            id: GroupId::new(self.id),
            name: self.name.clone().unwrap_or_default(),
            speciality_code: non_empty(self.speciality_code.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_domain::{render, SelectOption, SelectorConfig, SortOrder};
    use serde_json::json;

    fn login_page() -> PageData {
        PageData::from_value(json!({
            "studentsMap": {
                "1": [
                    { "fullName": "Петров Петр", "studentTicketNumber": "002" },
                    { "fullName": "Иванов Иван", "studentTicketNumber": "001" }
                ],
                "2": null,
                "oops": [{ "fullName": "Lost", "studentTicketNumber": "999" }]
            },
            "teachers": [{ "fullName": "Смирнова Анна" }, {}],
            "groups": [{ "id": 1, "name": "ИС-22", "specialityCode": "" }],
            "errorMessage": "Неверные учетные данные"
        }))
        .expect("valid page data")
    }

    #[test]
    fn roster_skips_bad_keys_and_tolerates_null() {
        let mapping = login_page().roster();
        assert_eq!(mapping.group_count(), 2);
        assert_eq!(
            mapping.students_in(GroupId::new(2)).map(<[_]>::len),
            Some(0)
        );
        assert_eq!(mapping.teachers().map(<[_]>::len), Some(2));
    }

    #[test]
    fn roster_feeds_selector() {
        let mapping = login_page().roster();
        let config = SelectorConfig::admin_roster().with_sort_order(SortOrder::LocaleAlphabetical);
        assert_eq!(
            render("1", &mapping, &config),
            vec![
                SelectOption::new("001", "Иванов Иван"),
                SelectOption::new("002", "Петров Петр"),
            ]
        );
    }

    #[test]
    fn null_group_renders_not_found() {
        let mapping = login_page().roster();
        let options = render("2", &mapping, &SelectorConfig::default());
        assert_eq!(options.len(), 1);
        assert!(options[0].is_placeholder());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let person = StudentData::default().to_person();
        assert_eq!(person.full_name, "");
        assert_eq!(person.identifier, None);
    }

    #[test]
    fn empty_speciality_code_is_none() {
        let groups = login_page().group_summaries();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "ИС-22");
        assert_eq!(groups[0].speciality_code, None);
    }

    #[test]
    fn flash_messages_become_banners() {
        let page = PageData::from_json(
            r#"{"studentsMap":{},"message":"Вы успешно вышли из системы","errorMessage":"  "}"#,
        )
        .expect("valid json");
        assert_eq!(
            page.flash.banners(),
            vec![(BannerKind::Success, "Вы успешно вышли из системы".to_string())]
        );
    }

    #[test]
    fn error_banner_comes_first() {
        let banners = login_page().flash.banners();
        assert_eq!(
            banners,
            vec![(BannerKind::Error, "Неверные учетные данные".to_string())]
        );
    }

    #[test]
    fn empty_object_is_valid() {
        let page = PageData::from_json("{}").expect("valid json");
        assert!(page.roster().is_empty());
        assert!(!page.has_teachers());
    }

    #[test]
    fn page_kind_defaults_to_login() {
        assert_eq!(login_page().page, PageKind::Login);
        let page = PageData::from_json(r#"{"page":"dashboard"}"#).expect("valid json");
        assert_eq!(page.page, PageKind::Dashboard);
    }

    #[test]
    fn page_kind_parses_case_insensitively() {
        assert_eq!(" Dashboard ".parse::<PageKind>().ok(), Some(PageKind::Dashboard));
        assert!("admin".parse::<PageKind>().is_err());
    }

    #[test]
    fn semesters_are_sorted_and_deduplicated() {
        let page = PageData::from_value(json!({
            "availableSemesters": [3, 1, 3, 2],
            "currentSemester": 3
        }))
        .expect("valid page data");
        assert_eq!(page.semesters(), vec![1, 2, 3]);
        assert_eq!(page.current_semester, Some(3));
    }

    #[test]
    fn semesters_fall_back_to_first_year() {
        assert_eq!(PageData::default().semesters(), vec![1, 2]);
    }

    #[test]
    fn null_students_map_keeps_rest_of_page() {
        let page = PageData::from_json(
            r#"{"studentsMap":null,"teachers":[{"fullName":"Смирнова Анна"}],"groups":[{"id":1,"name":"ИС-22"}],"errorMessage":"Неверные учетные данные"}"#,
        )
        .expect("null studentsMap is tolerated");
        assert_eq!(page.roster().group_count(), 0);
        assert!(page.has_teachers());
        assert_eq!(page.group_summaries().len(), 1);
        assert_eq!(page.flash.banners().len(), 1);
    }

    #[test]
    fn null_groups_read_as_empty() {
        let page = PageData::from_value(json!({
            "studentsMap": { "1": [{ "fullName": "Иванов Иван", "studentTicketNumber": "001" }] },
            "groups": null
        }))
        .expect("null groups are tolerated");
        assert!(page.groups.is_empty());
        assert_eq!(page.roster().group_count(), 1);
    }

    #[test]
    fn null_semesters_fall_back_to_defaults() {
        let page = PageData::from_value(json!({
            "page": "dashboard",
            "availableSemesters": null,
            "currentSemester": null
        }))
        .expect("null semesters are tolerated");
        assert_eq!(page.semesters(), DEFAULT_SEMESTERS.to_vec());
        assert_eq!(page.current_semester, None);
    }

    #[test]
    fn null_page_kind_is_login() {
        let page = PageData::from_json(r#"{"page":null}"#).expect("null page is tolerated");
        assert_eq!(page.page, PageKind::Login);
    }

    #[test]
    fn non_canonical_group_keys_are_skipped() {
        let page = PageData::from_value(json!({
            "studentsMap": {
                "1": [{ "fullName": "Иванов Иван", "studentTicketNumber": "001" }],
                "01": [{ "fullName": "Двойник", "studentTicketNumber": "900" }],
                " 1": [{ "fullName": "Пробел", "studentTicketNumber": "901" }]
            }
        }))
        .expect("valid page data");

        let mapping = page.roster();
        assert_eq!(mapping.group_count(), 1);
        let members = mapping.students_in(GroupId::new(1)).expect("group 1");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].full_name, "Иванов Иван");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            PageData::from_json("{\"studentsMap\": 3}"),
            Err(ContractError::Json(_))
        ));
    }
}
