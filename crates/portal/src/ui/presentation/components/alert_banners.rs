//! Flash message banners
//!
//! Each banner dismisses itself: visible for `BANNER_DISMISS_AFTER`, then
//! fading for `BANNER_FADE_DURATION`, then removed from the queue.

use dioxus::prelude::*;
use rollcall_domain::{Banner, BannerPhase, BANNER_DISMISS_AFTER, BANNER_FADE_DURATION};

use crate::presentation::state::use_portal_state;
use crate::use_platform;

#[component]
pub fn AlertBanners() -> Element {
    let state = use_portal_state();
    let banners = state.banners.read().banners().to_vec();

    rsx! {
        div {
            class: "alerts-container",
            for banner in banners {
                AlertBanner { key: "{banner.id}", banner }
            }
        }
    }
}

#[component]
fn AlertBanner(banner: Banner) -> Element {
    let mut state = use_portal_state();
    let platform = use_platform();
    let id = banner.id;

    // Auto-dismiss timer, started once per banner
    use_hook(move || {
        spawn(async move {
            platform.sleep_ms(millis(BANNER_DISMISS_AFTER)).await;
            if state.banners.write().begin_fade(id) {
                platform.sleep_ms(millis(BANNER_FADE_DURATION)).await;
                state.banners.write().dismiss(id);
                tracing::debug!(banner = %id, "Banner dismissed");
            }
        })
    });

    let fade = match banner.phase {
        BannerPhase::Visible => "opacity-100",
        BannerPhase::Fading => "opacity-0",
    };

    rsx! {
        div {
            id: "{banner.id}",
            class: "alert {banner.kind.css_class()} transition-opacity duration-500 {fade}",
            role: "alert",
            span { "{banner.message}" }
            button {
                r#type: "button",
                class: "btn-close",
                onclick: move |_| {
                    state.banners.write().dismiss(id);
                },
                "×"
            }
        }
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
