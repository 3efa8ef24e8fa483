//! Pure helpers shared by the roster and form modules.
//!
//! Everything here must work on both native and wasm32 targets.

pub mod collation;
pub mod string;

pub use collation::{locale_cmp, CollationKey};
pub use string::{non_empty, OptionStringExt};
