//! Click-outside-to-close dropdown menus
//!
//! Trigger buttons are recognised by an id ending in
//! [`DROPDOWN_BUTTON_SUFFIX`]; the panel id is the button id with its first
//! `Button` removed (`fallsemesterDropdownButton` → `fallsemesterDropdown`).

use std::collections::BTreeMap;

use crate::DomainError;

pub const DROPDOWN_BUTTON_SUFFIX: &str = "semesterDropdownButton";

/// Derive the panel id controlled by a trigger button.
pub fn panel_id_for_button(button_id: &str) -> Result<String, DomainError> {
    if !button_id.ends_with(DROPDOWN_BUTTON_SUFFIX) {
        return Err(DomainError::parse(format!(
            "not a dropdown button: {button_id}"
        )));
    }
    Ok(button_id.replacen("Button", "", 1))
}

/// Open/closed state of every dropdown on a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownMenus {
    open: BTreeMap<String, bool>,
}

impl DropdownMenus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the panel behind a trigger button, closed.
    /// Returns the panel id.
    pub fn register_button(&mut self, button_id: &str) -> Result<String, DomainError> {
        let panel = panel_id_for_button(button_id)?;
        self.open.entry(panel.clone()).or_insert(false);
        Ok(panel)
    }

    /// Trigger click: flip this panel only. The click does not reach the
    /// document, so other panels are left as they are.
    pub fn toggle(&mut self, panel_id: &str) -> Result<bool, DomainError> {
        let state = self
            .open
            .get_mut(panel_id)
            .ok_or_else(|| DomainError::not_found("Dropdown", panel_id))?;
        *state = !*state;
        Ok(*state)
    }

    /// Click inside a panel keeps it open
    pub fn click_inside(&mut self, _panel_id: &str) {}

    /// Click anywhere else on the document closes every panel
    pub fn click_outside(&mut self) {
        for state in self.open.values_mut() {
            *state = false;
        }
    }

    pub fn is_open(&self, panel_id: &str) -> bool {
        self.open.get(panel_id).copied().unwrap_or(false)
    }

    pub fn panels(&self) -> impl Iterator<Item = &str> {
        self.open.keys().map(String::as_str)
    }
}
