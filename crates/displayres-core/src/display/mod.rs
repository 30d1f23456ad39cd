//! Merged per-connector display records.

mod errors;
mod handler;
mod types;

pub use errors::DisplayError;
pub use handler::{
    find_display, merge_records, primary_display, resolve_displays, resolve_with_source,
};
pub use types::{MonitorRecord, Resolution, ScaleFactor, format_resolution};
