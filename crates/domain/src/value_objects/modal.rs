//! Modal dialog state machine

use serde::{Deserialize, Serialize};

use super::password::ChangePasswordForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can affect a modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalEvent {
    Open,
    Close,
    /// Click on the dimmed area around the dialog
    BackdropClick,
    EscapeKey,
    /// Click inside the dialog body; must not close it
    ContentClick,
}

impl ModalEvent {
    /// Map a keyboard `key` value to a modal event
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::EscapeKey),
            _ => None,
        }
    }
}

impl ModalState {
    pub fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::Open => Self::Open,
            ModalEvent::ContentClick => self,
            ModalEvent::Close | ModalEvent::BackdropClick | ModalEvent::EscapeKey => Self::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// The change-password modal: visibility plus its form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordDialog {
    state: ModalState,
    pub form: ChangePasswordForm,
}

impl ChangePasswordDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Apply an event. Showing the dialog always starts from a clean form.
    pub fn handle(&mut self, event: ModalEvent) {
        if event == ModalEvent::Open {
            self.form.reset();
        }
        self.state = self.state.apply(event);
    }
}
