extern crate self as rollcall_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod roster;
pub mod value_objects;

pub use entities::{GroupSummary, PersonRecord, PersonRole};

pub use error::DomainError;

pub use ids::GroupId;

// Re-export roster projection
pub use roster::{
    group_options, member_label, render, ChoosePrompt, EmptyValuePolicy, GroupSelection,
    LabelFormat, PlaceholderPolicy, RosterMapping, RosterSelector, SelectOption, SelectionState,
    SelectorConfig, SortOrder, CHOOSE_GROUP_LABEL, CHOOSE_STUDENT_LABEL, CHOOSE_USER_LABEL,
    NOT_FOUND_LABEL, NO_GROUP_LABEL, TEACHERS_GROUP_LABEL, TEACHERS_SENTINEL,
};

// Re-export value objects
pub use value_objects::{
    check_confirmation, panel_id_for_button, Banner, BannerId, BannerKind, BannerPhase,
    BannerQueue, ChangePasswordDialog, ChangePasswordForm, DropdownMenus, ModalEvent, ModalState,
    PasswordVisibility, BANNER_DISMISS_AFTER, BANNER_FADE_DURATION, DROPDOWN_BUTTON_SUFFIX,
    PASSWORD_MISMATCH_MESSAGE,
};
