//! Value objects - Small UI state machines with no identity

mod banner;
mod dropdown;
mod modal;
mod password;

pub use banner::{
    Banner, BannerId, BannerKind, BannerPhase, BannerQueue, BANNER_DISMISS_AFTER,
    BANNER_FADE_DURATION,
};
pub use dropdown::{panel_id_for_button, DropdownMenus, DROPDOWN_BUTTON_SUFFIX};
pub use modal::{ChangePasswordDialog, ModalEvent, ModalState};
pub use password::{
    check_confirmation, ChangePasswordForm, PasswordVisibility, PASSWORD_MISMATCH_MESSAGE,
};
