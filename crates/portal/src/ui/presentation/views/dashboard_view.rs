//! Student dashboard page
//!
//! Only the header widgets are client-side; the attendance and grade cards
//! are rendered by the server.

use dioxus::prelude::*;
use rollcall_domain::{ModalEvent, DROPDOWN_BUTTON_SUFFIX};

use crate::presentation::components::{AlertBanners, ChangePasswordModal, SemesterDropdown};
use crate::presentation::state::use_portal_state;

#[component]
pub fn DashboardView() -> Element {
    rsx! {
        PortalHeader {}
        main {
            class: "container py-4",
            AlertBanners {}
        }
    }
}

#[component]
fn PortalHeader() -> Element {
    let mut dialog = use_portal_state().password_dialog;

    rsx! {
        nav {
            class: "navbar navbar-dark bg-primary flex items-center justify-between px-4",
            span { class: "navbar-brand", "Личный кабинет" }
            div {
                class: "flex items-center gap-2",
                SemesterDropdown {
                    button_id: "attendance{DROPDOWN_BUTTON_SUFFIX}",
                    base_href: "/student/attendance",
                }
                SemesterDropdown {
                    button_id: "grades{DROPDOWN_BUTTON_SUFFIX}",
                    base_href: "/student/grades",
                }
                button {
                    r#type: "button",
                    class: "btn btn-outline-light",
                    onclick: move |_| dialog.write().handle(ModalEvent::Open),
                    "Сменить пароль"
                }
                form {
                    method: "post",
                    action: "/logout",
                    button { r#type: "submit", class: "btn btn-light", "Выйти" }
                }
            }
        }
        ChangePasswordModal {}
    }
}
