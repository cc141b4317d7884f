//! Hard-coded seed data.
//!
//! Everything here is immutable, defined at compile time, and never
//! validated or mutated: project records, bio text, timeline entries,
//! skills, resume facts, and contact details.

pub mod profile;
pub mod projects;
