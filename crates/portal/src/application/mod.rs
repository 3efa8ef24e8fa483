pub mod page_service;

pub use page_service::{load_portal_data, PortalData};
