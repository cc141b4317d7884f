//! Presentational components for the single page.
//!
//! Every section is a `#[component]` renderer over the seed data in
//! [`crate::data`]; interaction state lives in [`crate::state`] signals.

pub mod about;
pub mod bio_card;
pub mod clock;
pub mod contact;
pub mod cursor_fader;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod project_modal;
pub mod projects;
pub mod resume;
pub mod skills;
pub mod timeline;
