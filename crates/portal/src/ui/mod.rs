use crate::application::PortalData;
use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use rollcall_shared::PageKind;
use std::sync::Arc;

pub mod presentation;

use presentation::components::change_password_modal::dismiss_on_key;
use presentation::state::{use_portal_state, PortalState};
use presentation::views::{DashboardView, LoginView};

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from `main.rs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    /// Parse `ROLLCALL_SHELL`; unknown values fall back to the default
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/portal/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let data = use_context::<PortalData>();
    let platform = use_platform();

    let page = data.page;
    use_hook(move || platform.set_page_title(page.title()));

    // Signals must be created inside an active Dioxus runtime.
    use_context_provider(|| PortalState::new(&data));

    let content = match page {
        PageKind::Login => rsx! { LoginView {} },
        PageKind::Dashboard => rsx! { DashboardView {} },
    };

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/portal.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell { {content} }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell { {content} }
                },
            }
        }
    }
}

/// Document-level event target: any click that reaches it closes open
/// dropdowns, and Escape pressed anywhere dismisses the change-password modal.
#[component]
fn PageSurface(class: String, children: Element) -> Element {
    let mut state = use_portal_state();

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| state.menus.write().click_outside(),
            onkeydown: move |e: KeyboardEvent| {
                let key = e.key().to_string();
                if state.password_dialog.peek().is_open() {
                    dismiss_on_key(&mut state.password_dialog.write(), &key);
                }
            },
            {children}
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        PageSurface {
            class: "min-h-screen w-full bg-light",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        PageSurface {
            class: "min-h-screen w-full bg-light text-sm",
            {children}
        }
    }
}
