//! Locale-aware, case-insensitive ordering for person names.
//!
//! Names are compared in two levels. The primary level folds case and treats
//! `ё` as `е`; the secondary level then puts `е` before `ё`. Names that are
//! equal on both levels compare equal, so a stable sort keeps their input
//! order.

use std::cmp::Ordering;

/// Precomputed sort key for one name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<char>,
    secondary: Vec<bool>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let mut primary = Vec::with_capacity(text.len());
        let mut secondary = Vec::with_capacity(text.len());

        for c in text.chars().flat_map(char::to_lowercase) {
            match c {
                'ё' => {
                    primary.push('е');
                    secondary.push(true);
                }
                other => {
                    primary.push(other);
                    secondary.push(false);
                }
            }
        }

        Self { primary, secondary }
    }
}

/// Compare two names the way a Russian-locale `localeCompare` orders them,
/// ignoring case.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
