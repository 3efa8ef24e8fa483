//! Reusable page widgets

pub mod alert_banners;
pub mod change_password_modal;
pub mod login_form;
pub mod password_field;
pub mod semester_dropdown;

pub use alert_banners::AlertBanners;
pub use change_password_modal::ChangePasswordModal;
pub use login_form::LoginForm;
pub use password_field::PasswordField;
pub use semester_dropdown::SemesterDropdown;
