//! Rollcall Shared - the data contract embedded in server-rendered pages
//!
//! The login and dashboard templates inline a few JSON values into the page
//! (`studentsMap`, `teachers`, `groups`, and flash messages). This crate
//! owns their wire shape and converts them into domain types.
//!
//! # Design Principles
//!
//! 1. **Tolerant reads** - `null`, missing fields, and bad keys degrade to
//!    empty data, never to a failed page
//! 2. **No business logic** - rendering rules live in `rollcall-domain`
//! 3. **WASM compatible** - must compile for both native and wasm32 targets

pub mod error;
pub mod page_data;

pub use error::ContractError;
pub use page_data::{
    FlashMessages, GroupData, PageData, PageKind, StudentData, TeacherData, DEFAULT_SEMESTERS,
};
