//! PlatformPort - Unified platform services interface
//!
//! The UI only sees this trait. The concrete implementation (`Platform`)
//! lives in `state/platform.rs`.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}
