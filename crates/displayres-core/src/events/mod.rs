//! Application-level lifecycle events shared by the binaries.

use tracing::{error, info, warn};

use crate::errors::DisplayresError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an error with its code, at warn level for user errors.
pub fn log_app_error(error: &dyn DisplayresError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = false
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayError;

    #[test]
    fn test_log_app_error_without_subscriber_does_not_panic() {
        let error = DisplayError::DisplayNotFound {
            id: "HDMI-9".to_string(),
        };
        log_app_error(&error);
        log_app_startup();
    }
}
