//! Presentation layer - Dioxus UI components and pages

pub mod components;
pub mod pages;
pub mod services;
pub mod state;

pub use services::Services;
