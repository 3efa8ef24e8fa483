//! Portal state management using Dioxus signals
//!
//! Seeded once from `PortalData`. The banner queue, dropdown menus and the
//! change-password dialog are the only parts that change after startup.

use dioxus::prelude::*;
use rollcall_domain::{
    BannerQueue, ChangePasswordDialog, DropdownMenus, RosterMapping, RosterSelector, SelectOption,
};

use crate::application::PortalData;

#[derive(Clone, Copy)]
pub struct PortalState {
    /// Group id -> people, as embedded in the page
    pub roster: Signal<RosterMapping>,
    /// Person list renderer for the login form
    pub selector: Signal<RosterSelector>,
    /// Options of the group `<select>`
    pub group_options: Signal<Vec<SelectOption>>,
    pub semesters: Signal<Vec<u32>>,
    pub current_semester: Signal<Option<u32>>,
    pub banners: Signal<BannerQueue>,
    pub menus: Signal<DropdownMenus>,
    /// Page-wide so the page surface can route Escape to it
    pub password_dialog: Signal<ChangePasswordDialog>,
}

impl PortalState {
    pub fn new(data: &PortalData) -> Self {
        Self {
            roster: Signal::new(data.roster.clone()),
            selector: Signal::new(RosterSelector::new(data.selector_config())),
            group_options: Signal::new(data.group_options()),
            semesters: Signal::new(data.semesters.clone()),
            current_semester: Signal::new(data.current_semester),
            banners: Signal::new(data.banner_queue()),
            menus: Signal::new(DropdownMenus::new()),
            password_dialog: Signal::new(ChangePasswordDialog::new()),
        }
    }
}

/// Hook to access the portal state from Dioxus context
pub fn use_portal_state() -> PortalState {
    use_context::<PortalState>()
}
