//! # portfolio
//!
//! Leptos + WASM single-page portfolio site. Replaces a React + Tailwind
//! front end with a Rust-native UI layer, rendered entirely client-side.
//!
//! This crate contains the root application component, presentational
//! section components, hard-coded seed data, shared client-side state
//! (theme, clock, modal selection), and browser glue utilities.

pub mod app;
pub mod components;
pub mod data;
pub mod state;
pub mod util;
