pub mod portal_state;

pub use portal_state::{use_portal_state, PortalState};
