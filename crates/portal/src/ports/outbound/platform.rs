//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits keep presentation code free of `#[cfg]` branches: the
//! browser build reads page globals and uses `gloo-timers`, the desktop
//! build reads a JSON file and uses `tokio`.
//!
//! The `Platform` struct that aggregates them lives in `state/platform.rs`.

use std::{future::Future, pin::Pin};

use rollcall_shared::{ContractError, PageData};

/// Async sleep abstraction
///
/// Used by the banner auto-dismiss timer.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Source of the data the server template embedded in the page
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PageDataProvider: Send + Sync + 'static {
    /// Read the embedded data once. Callers treat an error as an empty page.
    fn load_page_data(&self) -> Result<PageData, ContractError>;
}
