//! Semester dropdown menu
//!
//! Clicks on the trigger and inside the panel stop at the component; any
//! other click reaches the page surface, which closes every panel.

use dioxus::prelude::*;
use rollcall_domain::panel_id_for_button;

use crate::presentation::state::use_portal_state;

#[derive(Props, Clone, PartialEq)]
pub struct SemesterDropdownProps {
    /// Must end in `semesterDropdownButton`
    pub button_id: String,
    /// Target of the semester links (`{base_href}?semester=N`)
    pub base_href: String,
}

pub fn semester_label(semester: u32) -> String {
    format!("{semester} семестр")
}

#[component]
pub fn SemesterDropdown(props: SemesterDropdownProps) -> Element {
    let mut state = use_portal_state();

    let button_id = props.button_id.clone();
    use_effect(move || {
        if let Err(e) = state.menus.write().register_button(&button_id) {
            tracing::warn!("Semester dropdown not rendered: {}", e);
        }
    });

    let Ok(panel_id) = panel_id_for_button(&props.button_id) else {
        return rsx! {};
    };

    let is_open = state.menus.read().is_open(&panel_id);
    let current = *state.current_semester.read();
    let items: Vec<(u32, &'static str)> = state
        .semesters
        .read()
        .iter()
        .map(|&semester| {
            let class = if current == Some(semester) {
                "dropdown-item active"
            } else {
                "dropdown-item"
            };
            (semester, class)
        })
        .collect();
    let button_label = current
        .map(semester_label)
        .unwrap_or_else(|| "Семестр".to_string());

    let toggle_panel = panel_id.clone();
    let inside_panel = panel_id.clone();
    let panel_class = if is_open {
        "dropdown-menu absolute mt-1"
    } else {
        "dropdown-menu absolute mt-1 hidden"
    };

    rsx! {
        div {
            class: "relative inline-block",
            button {
                id: "{props.button_id}",
                r#type: "button",
                class: "btn btn-outline-light dropdown-toggle",
                onclick: move |e| {
                    e.stop_propagation();
                    if let Err(err) = state.menus.write().toggle(&toggle_panel) {
                        tracing::warn!("Dropdown toggle ignored: {}", err);
                    }
                },
                "{button_label}"
            }
            div {
                id: "{panel_id}",
                class: "{panel_class}",
                onclick: move |e| {
                    e.stop_propagation();
                    state.menus.write().click_inside(&inside_panel);
                },
                for (semester, item_class) in items {
                    a {
                        class: "{item_class}",
                        href: "{props.base_href}?semester={semester}",
                        "{semester_label(semester)}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_label_is_ordinal_text() {
        assert_eq!(semester_label(1), "1 семестр");
        assert_eq!(semester_label(3), "3 семестр");
    }
}
