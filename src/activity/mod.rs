//! Activity log for vault operations
//!
//! Records when profiles were saved, exported, imported or restored and when
//! the theme changed, as line-delimited JSON. Entries hold no secrets.

mod entry;
mod logger;

pub use entry::{ActivityEntry, ActivityEvent};
pub use logger::ActivityLogger;
