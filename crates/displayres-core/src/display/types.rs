use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(width, height)` pixel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Multiply each axis by `scale`, rounding each to the nearest integer.
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            width: scale_axis(self.width, scale),
            height: scale_axis(self.height, scale),
        }
    }
}

fn scale_axis(value: u32, scale: f64) -> u32 {
    let scaled = (f64::from(value) * scale).round();
    if scaled <= 0.0 {
        0
    } else if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Format an optional resolution, `N/A` when absent.
pub fn format_resolution(resolution: Option<Resolution>) -> String {
    resolution
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Desktop UI scale factor of a display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFactor {
    /// Scale read from monitors.xml
    Configured(f64),
    /// Display seen only by xrandr; no scaling data, 1.0 assumed
    XrandrOnly,
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleFactor::Configured(scale) => write!(f, "{:.1}x", scale),
            ScaleFactor::XrandrOnly => write!(f, "N/A (xrandr only, assuming 1.0x)"),
        }
    }
}

/// Reconciled facts about one connected display connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorRecord {
    /// Connector name, e.g. `DP-2`
    pub id: String,
    /// Primary as designated by xrandr
    pub is_primary: bool,
    /// Physical mode currently active
    pub actual_resolution: Option<Resolution>,
    /// Resolution after desktop scaling
    pub logical_resolution: Option<Resolution>,
    /// Geometry xrandr reports on the connector line
    pub reported_resolution: Option<Resolution>,
    pub scale_factor: ScaleFactor,
}
