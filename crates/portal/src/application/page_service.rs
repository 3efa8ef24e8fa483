//! Page service - turns the embedded page data into what the views need
//!
//! Runs once at startup. A failed read is logged and the portal continues
//! with an empty page, so the login form still renders its placeholders.

use rollcall_domain::{
    group_options, BannerKind, BannerQueue, GroupSummary, RosterMapping, SelectOption,
    SelectorConfig,
};
use rollcall_shared::{PageData, PageKind};

use crate::ports::outbound::PageDataProvider;

/// Startup snapshot of the page, provided to the UI through context
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortalData {
    pub page: PageKind,
    pub roster: RosterMapping,
    pub groups: Vec<GroupSummary>,
    pub has_teachers: bool,
    pub semesters: Vec<u32>,
    pub current_semester: Option<u32>,
    /// Flash messages in display order
    pub flash: Vec<(BannerKind, String)>,
}

impl PortalData {
    pub fn from_page(page: &PageData) -> Self {
        Self {
            page: page.page,
            roster: page.roster(),
            groups: page.group_summaries(),
            has_teachers: page.has_teachers(),
            semesters: page.semesters(),
            current_semester: page.current_semester,
            flash: page.flash.banners(),
        }
    }

    /// Person list behaviour for this page's login form
    pub fn selector_config(&self) -> SelectorConfig {
        if self.has_teachers {
            SelectorConfig::login_with_teachers()
        } else {
            SelectorConfig::login_students()
        }
    }

    pub fn group_options(&self) -> Vec<SelectOption> {
        group_options(&self.groups, self.has_teachers)
    }

    /// Banner queue pre-filled with the page's flash messages
    pub fn banner_queue(&self) -> BannerQueue {
        let mut queue = BannerQueue::new();
        for (kind, message) in &self.flash {
            queue.push(*kind, message.clone());
        }
        queue
    }
}

/// Read the page data once, degrading to an empty page on error
pub fn load_portal_data(source: &dyn PageDataProvider) -> PortalData {
    match source.load_page_data() {
        Ok(page) => {
            let data = PortalData::from_page(&page);
            tracing::info!(
                page = ?data.page,
                groups = data.groups.len(),
                roster_groups = data.roster.group_count(),
                banners = data.flash.len(),
                "Page data loaded"
            );
            data
        }
        Err(e) => {
            tracing::warn!("Failed to load page data, continuing with empty page: {}", e);
            PortalData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockPageDataProvider;
    use rollcall_domain::{
        render, BannerPhase, GroupId, CHOOSE_GROUP_LABEL, NO_GROUP_LABEL, TEACHERS_SENTINEL,
    };
    use rollcall_shared::ContractError;
    use serde_json::json;

    fn provider_with(value: serde_json::Value) -> MockPageDataProvider {
        let mut provider = MockPageDataProvider::new();
        provider
            .expect_load_page_data()
            .times(1)
            .returning(move || PageData::from_value(value.clone()));
        provider
    }

    #[test]
    fn loads_roster_and_groups() {
        let provider = provider_with(json!({
            "studentsMap": {
                "1": [{ "fullName": "Иванов Иван", "studentTicketNumber": "001" }]
            },
            "groups": [{ "id": 1, "name": "ИС-22" }]
        }));

        let data = load_portal_data(&provider);
        assert_eq!(data.page, PageKind::Login);
        assert_eq!(data.roster.students_in(GroupId::new(1)).map(<[_]>::len), Some(1));
        assert_eq!(data.groups.len(), 1);
        assert!(!data.has_teachers);
    }

    #[test]
    fn source_error_degrades_to_empty_page() {
        let mut provider = MockPageDataProvider::new();
        provider
            .expect_load_page_data()
            .times(1)
            .returning(|| Err(ContractError::source_unavailable("no window object")));

        let data = load_portal_data(&provider);
        assert_eq!(data, PortalData::default());
        assert_eq!(
            render("", &data.roster, &data.selector_config()),
            vec![SelectOption::placeholder(NO_GROUP_LABEL)]
        );
    }

    #[test]
    fn flash_messages_seed_banner_queue() {
        let provider = provider_with(json!({
            "message": "Вы успешно вышли из системы",
            "errorMessage": "Неверные учетные данные"
        }));

        let queue = load_portal_data(&provider).banner_queue();
        let banners = queue.banners();
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].kind, BannerKind::Error);
        assert_eq!(banners[0].message, "Неверные учетные данные");
        assert_eq!(banners[1].kind, BannerKind::Success);
        assert!(banners.iter().all(|b| b.phase == BannerPhase::Visible));
    }

    #[test]
    fn teachers_switch_selector_preset() {
        let provider = provider_with(json!({
            "studentsMap": {},
            "teachers": [{ "fullName": "Смирнова Анна" }],
            "groups": [{ "id": 2, "name": "ПР-21" }]
        }));

        let data = load_portal_data(&provider);
        assert!(data.selector_config().role_support);

        let options = data.group_options();
        assert_eq!(options[0].label, CHOOSE_GROUP_LABEL);
        assert_eq!(
            options.last().map(|o| o.value.as_str()),
            Some(TEACHERS_SENTINEL)
        );

        let people = render(TEACHERS_SENTINEL, &data.roster, &data.selector_config());
        assert!(people.iter().any(|o| o.value == "Смирнова Анна"));
    }

    #[test]
    fn dashboard_carries_semesters() {
        let provider = provider_with(json!({
            "page": "dashboard",
            "availableSemesters": [2, 1],
            "currentSemester": 2
        }));

        let data = load_portal_data(&provider);
        assert_eq!(data.page, PageKind::Dashboard);
        assert_eq!(data.semesters, vec![1, 2]);
        assert_eq!(data.current_semester, Some(2));
    }
}
