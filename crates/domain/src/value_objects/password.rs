//! Password field value objects
//!
//! Covers the eye-icon visibility toggle and the change-password form's
//! confirmation gate. The only rule checked on the client is that the two
//! entries are equal; length and strength are the server's business.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Inline message revealed when the confirmation differs
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Пароли не совпадают!";

/// Masking state of a password input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Revealed,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Value for the input's `type` attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }

    /// Icon glyph class: the open eye offers to reveal, the slashed eye to hide
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Masked => "fa-eye",
            Self::Revealed => "fa-eye-slash",
        }
    }
}

/// Gate a password change on the confirmation matching exactly.
pub fn check_confirmation(new_password: &str, confirm_password: &str) -> Result<(), DomainError> {
    if new_password == confirm_password {
        Ok(())
    } else {
        Err(DomainError::validation(PASSWORD_MISMATCH_MESSAGE))
    }
}

/// Client state of the change-password form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub new_password: String,
    pub confirm_password: String,
    error_visible: bool,
}

impl ChangePasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    /// Run the submit gate. On mismatch the inline error is shown and the
    /// caller must not submit; on match the error is hidden again.
    pub fn submit(&mut self) -> Result<(), DomainError> {
        let outcome = check_confirmation(&self.new_password, &self.confirm_password);
        self.error_visible = outcome.is_err();
        outcome
    }

    /// Clear both fields and hide the error (the modal is being shown)
    pub fn reset(&mut self) {
        self.new_password.clear();
        self.confirm_password.clear();
        self.error_visible = false;
    }
}
