//! Steam installation and Proton prefix discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub const FALLOUT_NV_APP_ID: &str = "22380";

/// Relative to `steamapps`, for Proton installs.
pub fn prefs_relative_path() -> PathBuf {
    Path::new("compatdata")
        .join(FALLOUT_NV_APP_ID)
        .join("pfx/drive_c/users/steamuser/My Documents/My Games/FalloutNV/FalloutPrefs.ini")
}

/// Expand a leading `~` against `home`.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// Candidate roots in search order, without duplicates.
///
/// A user path ending in `steamapps` is replaced by its parent.
pub fn steam_root_candidates(user_path: Option<&str>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(user_path) = user_path {
        let expanded = expand_tilde(user_path, home);
        let root = if expanded.file_name().is_some_and(|name| name == "steamapps") {
            expanded
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or(expanded)
        } else {
            expanded
        };
        candidates.push(root);
    }

    if let Some(home) = home {
        for default in [home.join(".local/share/Steam"), home.join(".steam/steam")] {
            if !candidates.contains(&default) {
                candidates.push(default);
            }
        }
    }

    candidates
}

/// First candidate containing a `steamapps` directory.
pub fn find_steam_root(user_path: Option<&str>) -> Option<PathBuf> {
    let home = dirs::home_dir();
    find_steam_root_in(&steam_root_candidates(user_path, home.as_deref()))
}

pub fn find_steam_root_in(candidates: &[PathBuf]) -> Option<PathBuf> {
    let root = candidates
        .iter()
        .find(|root| root.join("steamapps").is_dir())
        .cloned();

    match &root {
        Some(root) => info!(event = "core.prefs.steam_root_found", path = %root.display()),
        None => debug!(event = "core.prefs.steam_root_missing", candidates = candidates.len()),
    }
    root
}

/// Locate FalloutPrefs.ini under the detected Steam root.
pub fn find_prefs_path(user_path: Option<&str>) -> Option<PathBuf> {
    prefs_path_under(&find_steam_root(user_path)?)
}

pub fn prefs_path_under(steam_root: &Path) -> Option<PathBuf> {
    let path = steam_root.join("steamapps").join(prefs_relative_path());
    path.exists().then_some(path)
}
