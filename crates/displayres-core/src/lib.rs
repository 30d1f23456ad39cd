//! Core library for displayres.
//!
//! Gathers connected-display facts from `xrandr` and GNOME's `monitors.xml`,
//! reconciles them into one record per connector, and feeds downstream
//! consumers such as the FalloutPrefs.ini window-size patcher.

pub mod config;
pub mod display;
pub mod errors;
pub mod events;
pub mod logging;
pub mod monitors_xml;
pub mod prefs;
pub mod xrandr;

pub use config::{DisplayresConfig, ResolverConfig, WindowFrame};
pub use display::{
    MonitorRecord, Resolution, ScaleFactor, find_display, primary_display, resolve_displays,
};
pub use logging::init_logging;
