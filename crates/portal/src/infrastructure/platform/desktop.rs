//! Desktop platform implementations
//!
//! There is no server template on desktop, so page data comes from a JSON
//! file with the same shape the templates inline.

use std::fs;
use std::path::PathBuf;
use std::{future::Future, pin::Pin};

use directories::ProjectDirs;
use rollcall_shared::{ContractError, PageData};

use crate::ports::outbound::platform::{DocumentProvider, PageDataProvider, SleepProvider};
use crate::state::Platform;

/// Environment variable naming the page data file
pub const PAGE_DATA_ENV: &str = "ROLLCALL_PAGE_DATA";

/// Desktop sleep provider using tokio
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(tokio::time::sleep(std::time::Duration::from_millis(ms)))
    }
}

/// Desktop document provider (window titles are fixed by dioxus-desktop)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        tracing::debug!(title, "Page title (desktop no-op)");
    }
}

/// Reads page data from a JSON file
///
/// Looked up at:
/// - `$ROLLCALL_PAGE_DATA` when set
/// - Linux: ~/.config/rollcall/portal/page-data.json
/// - macOS: ~/Library/Application Support/io.rollcall.portal/page-data.json
/// - Windows: C:\Users\<User>\AppData\Roaming\rollcall\portal\page-data.json
#[derive(Clone, Debug)]
pub struct DesktopPageDataProvider {
    path: PathBuf,
}

impl Default for DesktopPageDataProvider {
    fn default() -> Self {
        Self::from_env()
    }
}

impl DesktopPageDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        let path = std::env::var_os(PAGE_DATA_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                ProjectDirs::from("io", "rollcall", "portal")
                    .map(|dirs| dirs.config_dir().join("page-data.json"))
            })
            // Fallback to current directory if project dirs unavailable
            .unwrap_or_else(|| PathBuf::from("rollcall_page_data.json"));

        tracing::debug!("Desktop page data path: {:?}", path);
        Self { path }
    }
}

impl PageDataProvider for DesktopPageDataProvider {
    fn load_page_data(&self) -> Result<PageData, ContractError> {
        let data = fs::read_to_string(&self.path).map_err(|e| {
            ContractError::source_unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        PageData::from_json(&data)
    }
}

/// Create a Platform instance with all desktop providers
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopSleepProvider,
        DesktopDocumentProvider,
        DesktopPageDataProvider::from_env(),
    )
}
