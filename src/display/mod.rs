//! Display formatting for terminal output

pub mod profile;

pub use profile::{format_profile_details, format_theme};
