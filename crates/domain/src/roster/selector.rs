//! Roster selector - renders the person list for a group selection
//!
//! Every page that pairs a group dropdown with a person dropdown uses this
//! one function; the differences between pages are expressed as
//! [`SelectorConfig`] values rather than separate handlers.
//!
//! The output is a pure function of the raw selection, the mapping and the
//! config. Each call returns the complete option list, replacing whatever
//! was rendered before.

use serde::{Deserialize, Serialize};

use super::selection::GroupSelection;
use crate::common::{CollationKey, OptionStringExt};
use crate::{PersonRecord, RosterMapping, SelectOption};

/// Shown when no group has been chosen
pub const NO_GROUP_LABEL: &str = "Сначала выберите группу";

/// Shown when the chosen group resolves to nobody
pub const NOT_FOUND_LABEL: &str = "Студенты не найдены";

/// Header used by the student login page
pub const CHOOSE_STUDENT_LABEL: &str = "Выберите студента";

/// Header used when students and teachers share one list
pub const CHOOSE_USER_LABEL: &str = "Выберите пользователя";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelFormat {
    #[default]
    NameOnly,
    /// `"Full Name (identifier)"`; a missing identifier gives `"Full Name ()"`
    NameWithIdentifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep the server's order
    #[default]
    None,
    /// Stable, case-insensitive, locale-collated by full name
    LocaleAlphabetical,
}

/// What happens to members whose option value would be empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyValuePolicy {
    #[default]
    Skip,
    /// Render them anyway with an empty value (the legacy login page does)
    Keep,
}

/// Header placed above real entries when a group has members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoosePrompt {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderPolicy {
    pub no_group_label: String,
    pub not_found_label: String,
    pub choose_prompt: Option<ChoosePrompt>,
}

impl Default for PlaceholderPolicy {
    fn default() -> Self {
        Self {
            no_group_label: NO_GROUP_LABEL.to_string(),
            not_found_label: NOT_FOUND_LABEL.to_string(),
            choose_prompt: None,
        }
    }
}

impl PlaceholderPolicy {
    pub fn with_prompt(mut self, label: impl Into<String>, disabled: bool) -> Self {
        self.choose_prompt = Some(ChoosePrompt {
            label: label.into(),
            disabled,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub label_format: LabelFormat,
    pub sort_order: SortOrder,
    pub placeholders: PlaceholderPolicy,
    /// Accept the teacher sentinel alongside numeric group ids
    pub role_support: bool,
    pub empty_values: EmptyValuePolicy,
}

impl SelectorConfig {
    /// Student login page: "Name (ticket)", server order, selectable header.
    pub fn login_students() -> Self {
        Self {
            label_format: LabelFormat::NameWithIdentifier,
            sort_order: SortOrder::None,
            placeholders: PlaceholderPolicy::default().with_prompt(CHOOSE_STUDENT_LABEL, false),
            role_support: false,
            empty_values: EmptyValuePolicy::Keep,
        }
    }

    /// Shared student/teacher login: sorted, disabled header, teacher sentinel.
    pub fn login_with_teachers() -> Self {
        Self {
            label_format: LabelFormat::NameWithIdentifier,
            sort_order: SortOrder::LocaleAlphabetical,
            placeholders: PlaceholderPolicy::default().with_prompt(CHOOSE_USER_LABEL, true),
            role_support: true,
            empty_values: EmptyValuePolicy::Skip,
        }
    }

    /// Admin pages: bare names in alphabetical order.
    pub fn admin_roster() -> Self {
        Self {
            label_format: LabelFormat::NameOnly,
            sort_order: SortOrder::LocaleAlphabetical,
            placeholders: PlaceholderPolicy::default(),
            role_support: false,
            empty_values: EmptyValuePolicy::Skip,
        }
    }

    pub fn with_label_format(mut self, label_format: LabelFormat) -> Self {
        self.label_format = label_format;
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_placeholders(mut self, placeholders: PlaceholderPolicy) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn with_role_support(mut self, role_support: bool) -> Self {
        self.role_support = role_support;
        self
    }

    pub fn with_empty_values(mut self, empty_values: EmptyValuePolicy) -> Self {
        self.empty_values = empty_values;
        self
    }
}

/// Label for one member under the given format.
///
/// Teachers are always labelled by name alone.
pub fn member_label(person: &PersonRecord, format: LabelFormat) -> String {
    match (format, person.is_teacher()) {
        (LabelFormat::NameWithIdentifier, false) => format!(
            "{} ({})",
            person.full_name,
            person.identifier.as_str_or_empty()
        ),
        _ => person.full_name.clone(),
    }
}

/// Render the person options for a raw group `<select>` value.
pub fn render(
    selected_group: &str,
    mapping: &RosterMapping,
    config: &SelectorConfig,
) -> Vec<SelectOption> {
    let placeholders = &config.placeholders;

    let members = match GroupSelection::parse(selected_group, config.role_support) {
        GroupSelection::Empty => {
            return vec![SelectOption::placeholder(&placeholders.no_group_label)];
        }
        GroupSelection::Teachers => mapping.teachers(),
        GroupSelection::Group(id) => mapping.students_in(id),
        GroupSelection::Unresolvable(_) => None,
    };

    let members = match members {
        Some(m) if !m.is_empty() => m,
        _ => return vec![SelectOption::placeholder(&placeholders.not_found_label)],
    };

    let mut ordered: Vec<&PersonRecord> = members.iter().collect();
    if config.sort_order == SortOrder::LocaleAlphabetical {
        ordered.sort_by_cached_key(|p| CollationKey::new(&p.full_name));
    }

    let mut options = Vec::with_capacity(ordered.len() + 1);
    if let Some(prompt) = &placeholders.choose_prompt {
        options.push(SelectOption::prompt(&prompt.label, prompt.disabled));
    }

    let header_len = options.len();
    for person in ordered {
        let value = person.login_value();
        if value.is_empty() && config.empty_values == EmptyValuePolicy::Skip {
            continue;
        }
        options.push(SelectOption::new(value, member_label(person, config.label_format)));
    }

    // Everyone was skipped: nothing selectable is the same as nobody found.
    if options.len() == header_len {
        return vec![SelectOption::placeholder(&placeholders.not_found_label)];
    }

    options
}

/// A configured selector, for callers that hold one per page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterSelector {
    config: SelectorConfig,
}

impl RosterSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, selected_group: &str, mapping: &RosterMapping) -> Vec<SelectOption> {
        render(selected_group, mapping, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::locale_cmp;
    use crate::GroupId;
    use std::cmp::Ordering;

    fn sample_mapping() -> RosterMapping {
        RosterMapping::new()
            .with_group(
                GroupId::new(1),
                vec![
                    PersonRecord::student("Иванов Иван", "001"),
                    PersonRecord::student("Петров Петр", "002"),
                ],
            )
            .with_group(
                GroupId::new(2),
                vec![
                    PersonRecord::student("сидоров Олег", "010"),
                    PersonRecord::student("Ёлкина Мария", "011"),
                    PersonRecord::student("Абрамов Денис", "012"),
                    PersonRecord::student("Жуков Игорь", "013"),
                ],
            )
            .with_group(GroupId::new(3), Vec::new())
            .with_teachers(vec![
                PersonRecord::teacher("Смирнова Анна"),
                PersonRecord::teacher("Белов Павел"),
            ])
    }

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn sorted_names_only_scenario() {
        let config = SelectorConfig::default()
            .with_sort_order(SortOrder::LocaleAlphabetical)
            .with_label_format(LabelFormat::NameOnly);

        let options = render("1", &sample_mapping(), &config);

        assert_eq!(
            options,
            vec![
                SelectOption::new("001", "Иванов Иван"),
                SelectOption::new("002", "Петров Петр"),
            ]
        );
    }

    #[test]
    fn empty_selection_asks_for_group() {
        let options = render("", &sample_mapping(), &SelectorConfig::default());
        assert_eq!(options, vec![SelectOption::placeholder(NO_GROUP_LABEL)]);
        assert_eq!(options[0].label, "Сначала выберите группу");
    }

    #[test]
    fn unknown_group_is_not_found() {
        let options = render("9", &sample_mapping(), &SelectorConfig::default());
        assert_eq!(options, vec![SelectOption::placeholder(NOT_FOUND_LABEL)]);
        assert_eq!(options[0].label, "Студенты не найдены");
    }

    #[test]
    fn empty_group_is_not_found() {
        let options = render("3", &sample_mapping(), &SelectorConfig::login_with_teachers());
        assert_eq!(options, vec![SelectOption::placeholder(NOT_FOUND_LABEL)]);
    }

    #[test]
    fn non_numeric_selection_is_not_found() {
        let options = render("abc", &sample_mapping(), &SelectorConfig::default());
        assert_eq!(values(&options), vec![""]);
        assert_eq!(options[0].label, NOT_FOUND_LABEL);
    }

    #[test]
    fn sentinel_without_role_support_is_not_found() {
        let options = render("teachers", &sample_mapping(), &SelectorConfig::admin_roster());
        assert_eq!(labels(&options), vec![NOT_FOUND_LABEL]);
    }

    #[test]
    fn sentinel_with_role_support_lists_teachers_by_name() {
        let config = SelectorConfig::default().with_role_support(true);
        let options = render("teachers", &sample_mapping(), &config);
        assert_eq!(
            options,
            vec![
                SelectOption::new("Смирнова Анна", "Смирнова Анна"),
                SelectOption::new("Белов Павел", "Белов Павел"),
            ]
        );
    }

    #[test]
    fn teachers_ignore_identifier_format() {
        let options = render("teachers", &sample_mapping(), &SelectorConfig::login_with_teachers());
        assert_eq!(
            labels(&options),
            vec![CHOOSE_USER_LABEL, "Белов Павел", "Смирнова Анна"]
        );
    }

    #[test]
    fn sentinel_without_teacher_list_is_not_found() {
        let mapping = RosterMapping::new().with_group(
            GroupId::new(1),
            vec![PersonRecord::student("Иванов Иван", "001")],
        );
        let options = render("teachers", &mapping, &SelectorConfig::login_with_teachers());
        assert_eq!(labels(&options), vec![NOT_FOUND_LABEL]);
    }

    #[test]
    fn locale_sort_is_case_insensitive_and_handles_yo() {
        let options = render("2", &sample_mapping(), &SelectorConfig::admin_roster());
        assert_eq!(
            labels(&options),
            vec!["Абрамов Денис", "Ёлкина Мария", "Жуков Игорь", "сидоров Олег"]
        );
        for pair in options.windows(2) {
            assert_ne!(locale_cmp(&pair[0].label, &pair[1].label), Ordering::Greater);
        }
    }

    #[test]
    fn sort_is_stable_for_equal_names() {
        let mapping = RosterMapping::new().with_group(
            GroupId::new(1),
            vec![
                PersonRecord::student("Иванов Иван", "002"),
                PersonRecord::student("иванов иван", "001"),
            ],
        );
        let options = render("1", &mapping, &SelectorConfig::admin_roster());
        assert_eq!(values(&options), vec!["002", "001"]);
    }

    #[test]
    fn unsorted_keeps_server_order() {
        let options = render("2", &sample_mapping(), &SelectorConfig::default());
        assert_eq!(values(&options), vec!["010", "011", "012", "013"]);
    }

    #[test]
    fn disabled_prompt_adds_one_option() {
        let config = SelectorConfig::default()
            .with_placeholders(PlaceholderPolicy::default().with_prompt("Выберите", true));
        let options = render("2", &sample_mapping(), &config);

        assert_eq!(options.len(), 5);
        assert!(options[0].disabled);
        assert!(options[0].selected);
        assert!(options[0].is_placeholder());
        assert!(options[1..].iter().all(|o| !o.disabled && !o.selected));
    }

    #[test]
    fn prompt_not_shown_when_nothing_found() {
        let options = render("9", &sample_mapping(), &SelectorConfig::login_with_teachers());
        assert_eq!(options.len(), 1);
        assert!(!options[0].disabled);
    }

    #[test]
    fn login_students_matches_legacy_page() {
        let options = render("1", &sample_mapping(), &SelectorConfig::login_students());
        assert_eq!(
            labels(&options),
            vec![CHOOSE_STUDENT_LABEL, "Иванов Иван (001)", "Петров Петр (002)"]
        );
        assert!(!options[0].disabled);
        assert_eq!(values(&options), vec!["", "001", "002"]);
    }

    #[test]
    fn missing_identifier_renders_empty_parentheses_when_kept() {
        let mapping = RosterMapping::new().with_group(
            GroupId::new(4),
            vec![
                PersonRecord::unticketed_student("Орлов Глеб"),
                PersonRecord::student("Фомин Лев", "020"),
            ],
        );

        let kept = render("4", &mapping, &SelectorConfig::login_students());
        assert_eq!(
            labels(&kept),
            vec![CHOOSE_STUDENT_LABEL, "Орлов Глеб ()", "Фомин Лев (020)"]
        );
        assert_eq!(kept[1].value, "");

        let skipped = render(
            "4",
            &mapping,
            &SelectorConfig::login_students().with_empty_values(EmptyValuePolicy::Skip),
        );
        assert_eq!(labels(&skipped), vec![CHOOSE_STUDENT_LABEL, "Фомин Лев (020)"]);
    }

    #[test]
    fn all_members_skipped_is_not_found() {
        let mapping = RosterMapping::new().with_group(
            GroupId::new(4),
            vec![PersonRecord::unticketed_student("Орлов Глеб")],
        );
        let options = render("4", &mapping, &SelectorConfig::login_with_teachers());
        assert_eq!(labels(&options), vec![NOT_FOUND_LABEL]);
    }

    #[test]
    fn member_label_formats() {
        let p = PersonRecord::student("Иванов Иван", "001");
        assert_eq!(member_label(&p, LabelFormat::NameOnly), "Иванов Иван");
        assert_eq!(
            member_label(&p, LabelFormat::NameWithIdentifier),
            "Иванов Иван (001)"
        );
        let bare = PersonRecord::unticketed_student("Орлов Глеб");
        assert_eq!(
            member_label(&bare, LabelFormat::NameWithIdentifier),
            "Орлов Глеб ()"
        );
    }

    #[test]
    fn resolvable_count_matches_members() {
        let mapping = sample_mapping();
        for config in [
            SelectorConfig::default(),
            SelectorConfig::admin_roster(),
            SelectorConfig::login_with_teachers(),
        ] {
            let extra = usize::from(config.placeholders.choose_prompt.is_some());
            let options = render("2", &mapping, &config);
            assert_eq!(options.len(), 4 + extra);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let mapping = sample_mapping();
        let selector = RosterSelector::new(SelectorConfig::login_with_teachers());
        for raw in ["", "1", "2", "9", "teachers", "x"] {
            assert_eq!(selector.render(raw, &mapping), selector.render(raw, &mapping));
        }
    }

    #[test]
    fn integer_coercion_resolves_trailing_garbage() {
        let options = render("1abc", &sample_mapping(), &SelectorConfig::admin_roster());
        assert_eq!(values(&options), vec!["001", "002"]);
    }
}
