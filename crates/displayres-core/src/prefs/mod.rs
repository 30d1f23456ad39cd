//! Fit Fallout New Vegas' windowed mode to the primary display.

mod errors;
mod handler;
mod ini;
mod steam;

pub use errors::PrefsError;
pub use handler::{WindowTarget, apply_prefs, target_size, window_size};
pub use ini::{PatchOutcome, PrefsChange, patch_display_section};
pub use steam::{
    FALLOUT_NV_APP_ID, expand_tilde, find_prefs_path, find_steam_root, find_steam_root_in,
    prefs_path_under, prefs_relative_path, steam_root_candidates,
};
