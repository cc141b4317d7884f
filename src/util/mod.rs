//! Browser glue and small pure helpers.

pub mod markup;
pub mod scroll_lock;
pub mod theme_pref;
