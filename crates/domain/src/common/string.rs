//! String normalisation for values arriving from page data.

/// Collapses an absent or empty value to `None`.
///
/// Server JSON uses both `null` and `""` for "no ticket number"; callers
/// should not have to care which one they got.
///
/// # Examples
///
/// ```
/// use rollcall_domain::common::non_empty;
///
/// assert_eq!(non_empty(Some("001".to_string())), Some("001".to_string()));
/// assert_eq!(non_empty(Some(String::new())), None);
/// assert_eq!(non_empty(None), None);
/// ```
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Borrowing accessors for optional text fields.
pub trait OptionStringExt {
    /// The contained text, or `""` when absent.
    fn as_str_or_empty(&self) -> &str;
}

impl OptionStringExt for Option<String> {
    fn as_str_or_empty(&self) -> &str {
        self.as_deref().unwrap_or("")
    }
}
