use crate::errors::DisplayresError;

#[derive(Debug, thiserror::Error)]
pub enum XrandrError {
    #[error("Display enumeration command not found: {command}")]
    CommandNotFound { command: String },

    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

impl DisplayresError for XrandrError {
    fn error_code(&self) -> &'static str {
        match self {
            XrandrError::CommandNotFound { .. } => "XRANDR_NOT_FOUND",
            XrandrError::SpawnFailed { .. } => "XRANDR_SPAWN_FAILED",
            XrandrError::CommandFailed { .. } => "XRANDR_COMMAND_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, XrandrError::CommandNotFound { .. })
    }
}
