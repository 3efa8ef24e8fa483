//! Rollcall portal - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rollcall_portal::ports::outbound::PlatformPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rollcall_portal=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Rollcall portal");

    // Platform
    let platform = rollcall_portal::infrastructure::platform::create_platform();

    // Page data is embedded once per page load
    let data = rollcall_portal::application::load_portal_data(&platform);

    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            if width < 768.0 {
                rollcall_portal::ShellKind::Mobile
            } else {
                rollcall_portal::ShellKind::Desktop
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("ROLLCALL_SHELL")
                .ok()
                .and_then(|s| rollcall_portal::ShellKind::from_env_value(&s))
                .unwrap_or_default()
        }
    };

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let cfg = dioxus_desktop::Config::new().with_window(
            dioxus_desktop::WindowBuilder::new().with_title(data.page.title()),
        );
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(data)
        .launch(rollcall_portal::app);
}
