use crate::errors::DisplayresError;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("No connected displays found")]
    NoDisplays,

    #[error("Display '{id}' not found or not currently connected")]
    DisplayNotFound { id: String },
}

impl DisplayresError for DisplayError {
    fn error_code(&self) -> &'static str {
        match self {
            DisplayError::NoDisplays => "NO_DISPLAYS",
            DisplayError::DisplayNotFound { .. } => "DISPLAY_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_found() {
        let error = DisplayError::DisplayNotFound {
            id: "HDMI-2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Display 'HDMI-2' not found or not currently connected"
        );
        assert_eq!(error.error_code(), "DISPLAY_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_no_displays() {
        assert_eq!(DisplayError::NoDisplays.error_code(), "NO_DISPLAYS");
    }
}
