//! Page views, one per server template

pub mod dashboard_view;
pub mod login_view;

pub use dashboard_view::DashboardView;
pub use login_view::LoginView;
