//! Login page

use dioxus::prelude::*;

use crate::presentation::components::{AlertBanners, LoginForm};

#[component]
pub fn LoginView() -> Element {
    rsx! {
        div {
            class: "container flex items-center justify-center min-h-screen",
            div {
                class: "card w-full max-w-[420px] p-6",
                h2 { class: "text-center mb-4", "Вход в систему" }
                AlertBanners {}
                LoginForm {}
            }
        }
    }
}
