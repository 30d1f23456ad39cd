use std::path::Path;

use tracing::{info, warn};

use super::errors::PrefsError;
use super::ini::{PatchOutcome, patch_display_section};
use crate::config::WindowFrame;
use crate::display::{MonitorRecord, Resolution, primary_display};

/// Shrink a display size by the window decorations around the game.
pub fn window_size(reported: Resolution, frame: &WindowFrame) -> Resolution {
    Resolution::new(
        reported
            .width
            .saturating_sub(frame.border_width.saturating_mul(2)),
        reported
            .height
            .saturating_sub(frame.titlebar_height)
            .saturating_sub(frame.border_height),
    )
}

/// The game window size derived from a display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTarget {
    pub display_id: String,
    pub reported: Resolution,
    pub window: Resolution,
}

/// Window size for the primary display's xrandr reported resolution.
pub fn target_size(
    records: &[MonitorRecord],
    frame: &WindowFrame,
) -> Result<WindowTarget, PrefsError> {
    let primary = primary_display(records).ok_or(PrefsError::NoPrimaryDisplay)?;
    let reported = primary
        .reported_resolution
        .ok_or_else(|| PrefsError::NoReportedResolution {
            id: primary.id.clone(),
        })?;
    Ok(WindowTarget {
        display_id: primary.id.clone(),
        reported,
        window: window_size(reported, frame),
    })
}

/// Patch the prefs file at `path`; only writes when `force` is set.
pub fn apply_prefs(path: &Path, size: Resolution, force: bool) -> Result<PatchOutcome, PrefsError> {
    info!(
        event = "core.prefs.apply_started",
        path = %path.display(),
        width = size.width,
        height = size.height,
        force = force
    );

    if !path.exists() {
        return Err(PrefsError::PrefsFileNotFound {
            path: path.display().to_string(),
        });
    }

    let io_error = |source| PrefsError::IoError {
        path: path.display().to_string(),
        source,
    };

    let contents = std::fs::read_to_string(path).map_err(io_error)?;
    let outcome = patch_display_section(&contents, size);

    if !outcome.display_section_found {
        warn!(event = "core.prefs.display_section_missing", path = %path.display());
    }

    if force {
        std::fs::write(path, outcome.contents()).map_err(io_error)?;
    }

    info!(
        event = "core.prefs.apply_completed",
        changes = outcome.changes.len(),
        written = force
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ScaleFactor;

    fn record(id: &str, primary: bool, reported: Option<Resolution>) -> MonitorRecord {
        MonitorRecord {
            id: id.to_string(),
            is_primary: primary,
            actual_resolution: None,
            logical_resolution: reported,
            reported_resolution: reported,
            scale_factor: ScaleFactor::XrandrOnly,
        }
    }

    #[test]
    fn test_window_size_defaults() {
        let size = window_size(Resolution::new(2560, 1440), &WindowFrame::default());
        assert_eq!(size, Resolution::new(2558, 1299));
    }

    #[test]
    fn test_window_size_saturates() {
        let size = window_size(Resolution::new(1, 100), &WindowFrame::default());
        assert_eq!(size, Resolution::new(0, 0));
    }

    #[test]
    fn test_target_size_uses_primary_reported() {
        let records = vec![
            record("DP-1", false, Some(Resolution::new(1920, 1080))),
            record("DP-2", true, Some(Resolution::new(2560, 1440))),
        ];
        let target = target_size(&records, &WindowFrame::default()).unwrap();
        assert_eq!(target.display_id, "DP-2");
        assert_eq!(target.reported, Resolution::new(2560, 1440));
        assert_eq!(target.window, Resolution::new(2558, 1299));
    }

    #[test]
    fn test_target_size_without_primary() {
        let records = vec![record("DP-1", false, Some(Resolution::new(1920, 1080)))];
        assert!(matches!(
            target_size(&records, &WindowFrame::default()),
            Err(PrefsError::NoPrimaryDisplay)
        ));
    }

    #[test]
    fn test_target_size_without_reported_resolution() {
        let records = vec![record("DP-1", true, None)];
        assert!(matches!(
            target_size(&records, &WindowFrame::default()),
            Err(PrefsError::NoReportedResolution { .. })
        ));
    }

    #[test]
    fn test_apply_dry_run_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FalloutPrefs.ini");
        std::fs::write(&path, "[Display]\niSize W=800\niSize H=600\n").unwrap();

        let outcome = apply_prefs(&path, Resolution::new(1918, 939), false).unwrap();
        assert_eq!(outcome.changes.len(), 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[Display]\niSize W=800\niSize H=600\n"
        );
    }

    #[test]
    fn test_apply_force_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FalloutPrefs.ini");
        std::fs::write(&path, "[Display]\niSize W=800\niSize H=600\n").unwrap();

        apply_prefs(&path, Resolution::new(1918, 939), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[Display]\niSize W=1918\niSize H=939\n"
        );
    }

    #[test]
    fn test_apply_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = apply_prefs(&dir.path().join("nope.ini"), Resolution::new(1, 1), true);
        assert!(matches!(result, Err(PrefsError::PrefsFileNotFound { .. })));
    }
}
