//! Domain entities - Records delivered by the server with the page

mod group;
mod person;

pub use group::GroupSummary;
pub use person::{PersonRecord, PersonRole};
