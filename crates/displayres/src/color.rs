//! Terminal colors for display ids and status markers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

// Ice: #7CB4C8
const ICE: (u8, u8, u8) = (124, 180, 200);

// Aurora: #6B8F5E
const AURORA: (u8, u8, u8) = (107, 143, 94);

// Text muted: #5C6370
const MUTED: (u8, u8, u8) = (92, 99, 112);

/// Display connector ids.
pub fn ice(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(ICE.0, ICE.1, ICE.2))
        .to_string()
}

/// The primary marker.
pub fn aurora(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(AURORA.0, AURORA.1, AURORA.2))
        .to_string()
}

/// Separators and N/A values.
pub fn muted(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}
