use crate::errors::DisplayresError;

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("No Steam installation found in common locations")]
    SteamRootNotFound,

    #[error("FalloutPrefs.ini not found at '{path}'")]
    PrefsFileNotFound { path: String },

    #[error("No primary display found")]
    NoPrimaryDisplay,

    #[error("Primary display '{id}' has no xrandr reported resolution")]
    NoReportedResolution { id: String },

    #[error("IO error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DisplayresError for PrefsError {
    fn error_code(&self) -> &'static str {
        match self {
            PrefsError::SteamRootNotFound => "STEAM_ROOT_NOT_FOUND",
            PrefsError::PrefsFileNotFound { .. } => "PREFS_FILE_NOT_FOUND",
            PrefsError::NoPrimaryDisplay => "NO_PRIMARY_DISPLAY",
            PrefsError::NoReportedResolution { .. } => "NO_REPORTED_RESOLUTION",
            PrefsError::IoError { .. } => "PREFS_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, PrefsError::IoError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_not_found() {
        let error = PrefsError::PrefsFileNotFound {
            path: "/tmp/FalloutPrefs.ini".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "FalloutPrefs.ini not found at '/tmp/FalloutPrefs.ini'"
        );
        assert_eq!(error.error_code(), "PREFS_FILE_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let error = PrefsError::IoError {
            path: "/tmp/x".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert!(!error.is_user_error());
    }
}
