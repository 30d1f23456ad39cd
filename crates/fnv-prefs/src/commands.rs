use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{error, info};

use displayres_core::config::load_config_with_warning;
use displayres_core::display::resolve_displays;
use displayres_core::events;
use displayres_core::prefs::{
    PatchOutcome, PrefsError, apply_prefs, expand_tilde, find_steam_root, prefs_path_under,
    target_size,
};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = load_config_with_warning(config_path.as_deref());
    let steam_path = matches.get_one::<String>("steam-path").map(String::as_str);
    let explicit = matches.get_one::<String>("prefs-path").map(String::as_str);
    let force = matches.get_flag("force");

    let steam_root = find_steam_root(steam_path);
    match &steam_root {
        Some(root) => eprintln!("Steam installation detected at: {}", root.display()),
        None => eprintln!(
            "Info: No Steam installation found in common locations. Please ensure Steam is installed or specify its path."
        ),
    }
    eprintln!();

    if explicit.is_none() {
        eprintln!("Attempting to auto-detect FalloutPrefs.ini path...");
    }
    let home = dirs::home_dir();
    let prefs_path = match resolve_prefs_path(explicit, steam_root.as_deref(), home.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            if explicit.is_none() {
                eprintln!("Could not auto-detect FalloutPrefs.ini path.");
                eprintln!(
                    "Please ensure Steam is installed, Fallout New Vegas is installed via Proton/Wine,"
                );
                eprintln!(
                    "and either provide the full path as an argument or specify your Steam root directory with --steam-path."
                );
            }
            error!(event = "cli.prefs_path_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };
    eprintln!("Using FalloutPrefs.ini at: {}", prefs_path.display());

    let records = resolve_displays(&config.resolver);
    let target = match target_size(&records, &config.window) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error: {}.", e);
            events::log_app_error(&e);
            return Ok(());
        }
    };

    eprintln!(
        "Primary display {} xrandr reported resolution: {}",
        target.display_id, target.reported
    );
    eprintln!(
        "Adjusted resolution for Fallout New Vegas: {}",
        target.window
    );

    info!(
        event = "cli.prefs_apply_started",
        path = %prefs_path.display(),
        force = force
    );

    let outcome = apply_prefs(&prefs_path, target.window, force)?;
    report_outcome(&outcome, &prefs_path, force);

    info!(
        event = "cli.prefs_apply_completed",
        changes = outcome.changes.len()
    );
    Ok(())
}

/// Explicit path (tilde-expanded, must exist) or the Proton prefix under
/// the detected Steam root.
fn resolve_prefs_path(
    explicit: Option<&str>,
    steam_root: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, PrefsError> {
    if let Some(explicit) = explicit {
        let path = expand_tilde(explicit, home);
        if !path.exists() {
            return Err(PrefsError::PrefsFileNotFound {
                path: path.display().to_string(),
            });
        }
        return Ok(path);
    }

    let steam_root = steam_root.ok_or(PrefsError::SteamRootNotFound)?;
    prefs_path_under(steam_root).ok_or_else(|| PrefsError::PrefsFileNotFound {
        path: steam_root.join("steamapps").display().to_string(),
    })
}

fn report_outcome(outcome: &PatchOutcome, path: &Path, force: bool) {
    if !outcome.display_section_found {
        eprintln!(
            "Warning: [Display] section not found in file. Cannot insert iSize W/H if they don't exist."
        );
    }

    if force {
        eprintln!("Successfully modified {}", path.display());
        return;
    }

    for change in &outcome.changes {
        eprintln!("DRY RUN: Would {}", change);
    }
    eprintln!();
    eprintln!("--- DRY RUN: Proposed File Content ---");
    for line in &outcome.lines {
        println!("{}", line.trim());
    }
    eprintln!("------------------------------------");
    eprintln!(
        "Dry run complete. No changes were written to the file. Use -f or --force to apply changes."
    );
}
