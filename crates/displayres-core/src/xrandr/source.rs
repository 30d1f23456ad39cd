use std::process::Command;

use tracing::{debug, info};

use super::errors::XrandrError;
use super::parser::{XrandrSnapshot, parse_xrandr_output};

/// A producer of `xrandr`-formatted display enumeration text.
pub trait DisplaySource {
    /// Human-readable name for logs and messages.
    fn name(&self) -> &str;

    /// Run the enumeration and return its raw text output.
    fn output(&self) -> Result<String, XrandrError>;
}

/// Runs the `xrandr` binary (or a configured replacement) found on `PATH`.
pub struct XrandrCommand {
    command: String,
}

impl XrandrCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl DisplaySource for XrandrCommand {
    fn name(&self) -> &str {
        &self.command
    }

    fn output(&self) -> Result<String, XrandrError> {
        let path = which::which(&self.command).map_err(|_| XrandrError::CommandNotFound {
            command: self.command.clone(),
        })?;

        debug!(event = "core.xrandr.command_resolved", path = %path.display());

        let output = Command::new(&path)
            .output()
            .map_err(|e| XrandrError::SpawnFailed {
                command: self.command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(XrandrError::CommandFailed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Query a display source and parse its output.
pub fn enumerate_displays(source: &dyn DisplaySource) -> Result<XrandrSnapshot, XrandrError> {
    info!(event = "core.xrandr.query_started", source = source.name());

    let output = source.output()?;
    let snapshot = parse_xrandr_output(&output);

    info!(
        event = "core.xrandr.query_completed",
        source = source.name(),
        connected = snapshot.connected.len(),
        primary = ?snapshot.primary
    );
    Ok(snapshot)
}
