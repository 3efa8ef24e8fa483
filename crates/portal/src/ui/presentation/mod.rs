//! Presentation layer: reactive state, components and page views

pub mod components;
pub mod state;
pub mod views;
