use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_XRANDR_COMMAND: &str = "xrandr";

/// Top-level configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayresConfig {
    pub resolver: ResolverConfig,
    pub window: WindowFrame,
}

/// Where the resolver reads its two data sources from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Display enumeration command, looked up on `PATH`
    pub xrandr_command: String,
    /// Explicit monitors.xml path; `None` means `<config_dir>/monitors.xml`
    pub monitors_xml: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            xrandr_command: DEFAULT_XRANDR_COMMAND.to_string(),
            monitors_xml: None,
        }
    }
}

impl ResolverConfig {
    pub fn with_xrandr_command(mut self, command: impl Into<String>) -> Self {
        self.xrandr_command = command.into();
        self
    }

    pub fn with_monitors_xml(mut self, path: impl Into<PathBuf>) -> Self {
        self.monitors_xml = Some(path.into());
        self
    }

    /// Resolve the monitors.xml path, falling back to the per-user default.
    pub fn monitors_xml_path(&self) -> Option<PathBuf> {
        self.monitors_xml
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join("monitors.xml")))
    }
}

/// Window decorations subtracted from the display size when fitting a
/// windowed game onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowFrame {
    /// Window manager titlebar (64) plus the game window's own titlebar (75)
    pub titlebar_height: u32,
    /// Bottom border
    pub border_height: u32,
    /// Left and right border, each
    pub border_width: u32,
}

impl Default for WindowFrame {
    fn default() -> Self {
        Self {
            titlebar_height: 139,
            border_height: 2,
            border_width: 1,
        }
    }
}
