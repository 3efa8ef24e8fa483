//! Platform DI Container
//!
//! `Platform` aggregates the platform-specific providers behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by `main.rs` as `Arc<dyn PlatformPort>`
//! - Read once at startup through its `PageDataProvider` impl

use std::{future::Future, pin::Pin, sync::Arc};

use rollcall_shared::{ContractError, PageData};

use crate::ports::outbound::{DocumentProvider, PageDataProvider, PlatformPort, SleepProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn SleepProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    page_data: Arc<dyn PageDataProvider>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Sl, D, P>(sleep: Sl, document: D, page_data: P) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        P: PageDataProvider,
    {
        Self {
            sleep: Arc::new(sleep),
            document: Arc::new(document),
            page_data: Arc::new(page_data),
        }
    }
}

impl PageDataProvider for Platform {
    fn load_page_data(&self) -> Result<PageData, ContractError> {
        self.page_data.load_page_data()
    }
}

impl PlatformPort for Platform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockPageDataProvider;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct InstantSleep;

    impl SleepProvider for InstantSleep {
        fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
            Box::pin(std::future::ready(()))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDocument {
        titles: Arc<Mutex<Vec<String>>>,
    }

    impl DocumentProvider for RecordingDocument {
        fn set_page_title(&self, title: &str) {
            if let Ok(mut titles) = self.titles.lock() {
                titles.push(title.to_string());
            }
        }
    }

    #[test]
    fn platform_delegates_to_providers() {
        let document = RecordingDocument::default();
        let mut page_data = MockPageDataProvider::new();
        page_data
            .expect_load_page_data()
            .times(1)
            .returning(|| Ok(PageData::default()));

        let platform = Platform::new(InstantSleep, document.clone(), page_data);
        platform.set_page_title("Вход в систему");

        assert_eq!(platform.load_page_data().ok(), Some(PageData::default()));
        assert_eq!(
            document.titles.lock().expect("lock").as_slice(),
            ["Вход в систему".to_string()]
        );
    }
}
