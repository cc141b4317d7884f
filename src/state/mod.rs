//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `clock`, `modal`, `nav`) so individual
//! components can depend on small focused models. The theme and clock are
//! provided as `RwSignal` contexts from the root component; modal selection
//! is owned by the projects section. Everything here is plain data so it can
//! be unit tested off-browser.

pub mod clock;
pub mod modal;
pub mod nav;
pub mod theme;
