use crate::errors::DisplayresError;

#[derive(Debug, thiserror::Error)]
pub enum MonitorsXmlError {
    #[error("monitors.xml not found at '{path}'")]
    NotFound { path: String },

    #[error("Could not determine monitors.xml location")]
    NoConfigDir,

    #[error("Failed to read '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse monitors.xml: {message}")]
    ParseError { message: String },
}

impl DisplayresError for MonitorsXmlError {
    fn error_code(&self) -> &'static str {
        match self {
            MonitorsXmlError::NotFound { .. } => "MONITORS_XML_NOT_FOUND",
            MonitorsXmlError::NoConfigDir => "MONITORS_XML_NO_CONFIG_DIR",
            MonitorsXmlError::IoError { .. } => "MONITORS_XML_IO_ERROR",
            MonitorsXmlError::ParseError { .. } => "MONITORS_XML_PARSE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            MonitorsXmlError::NotFound { .. } | MonitorsXmlError::ParseError { .. }
        )
    }
}
