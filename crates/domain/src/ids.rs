use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Server-side surrogate keys (`Long` columns)
define_id!(GroupId);

impl GroupId {
    /// Coerce a raw `<select>` value into a group id the way browsers do
    /// `parseInt(value)`: leading whitespace is skipped, an optional sign and
    /// an optional `0x` prefix are accepted, and parsing stops at the first
    /// character that is not a digit. `"12abc"` is 12; `"abc"` is `None`.
    ///
    /// No check is made that the group exists.
    pub fn coerce(raw: &str) -> Option<Self> {
        let s = raw.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (radix, digits) = match s.get(..2) {
            Some("0x") | Some("0X") => (16, &s[2..]),
            _ => (10, s),
        };

        let mut value: i64 = 0;
        let mut seen_digit = false;
        for c in digits.chars() {
            let Some(d) = c.to_digit(radix) else {
                break;
            };
            seen_digit = true;
            value = value
                .checked_mul(i64::from(radix))?
                .checked_add(i64::from(d))?;
        }

        if !seen_digit {
            return None;
        }
        Some(Self(if negative { -value } else { value }))
    }
}
