//! WASM platform implementations
//!
//! The server template inlines page data as `window` globals before the
//! bundle loads; they are read once with `js-sys` and `serde-wasm-bindgen`.

use std::{future::Future, pin::Pin};

use rollcall_shared::{ContractError, PageData};
use wasm_bindgen::JsValue;

use crate::ports::outbound::platform::{DocumentProvider, PageDataProvider, SleepProvider};
use crate::state::Platform;

/// Globals copied verbatim into the page data object
const PAGE_GLOBALS: [&str; 6] = [
    "page",
    "studentsMap",
    "teachers",
    "groups",
    "availableSemesters",
    "currentSemester",
];

/// Global holding `{ errorMessage, successMessage, message }`
const FLASH_GLOBAL: &str = "flash";

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Reads the page globals from `window`
#[derive(Clone, Default)]
pub struct WasmPageDataProvider;

impl PageDataProvider for WasmPageDataProvider {
    fn load_page_data(&self) -> Result<PageData, ContractError> {
        let window = web_sys::window()
            .ok_or_else(|| ContractError::source_unavailable("no window object"))?;

        let mut fields = serde_json::Map::new();
        for name in PAGE_GLOBALS {
            if let Some(value) = read_global(&window, name)? {
                fields.insert(name.to_string(), value);
            }
        }

        // Flash messages are flattened into the page data object
        if let Some(serde_json::Value::Object(flash)) = read_global(&window, FLASH_GLOBAL)? {
            fields.extend(flash);
        }

        PageData::from_value(serde_json::Value::Object(fields))
    }
}

/// `undefined` and `null` globals read as absent
fn read_global(
    window: &web_sys::Window,
    name: &str,
) -> Result<Option<serde_json::Value>, ContractError> {
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(name))
        .map_err(|_| ContractError::source_unavailable(format!("cannot read window.{name}")))?;

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ContractError::source_unavailable(format!("window.{name}: {e}")))
}

/// Create a Platform instance with all WASM providers
pub fn create_platform() -> Platform {
    Platform::new(WasmSleepProvider, WasmDocumentProvider, WasmPageDataProvider)
}
