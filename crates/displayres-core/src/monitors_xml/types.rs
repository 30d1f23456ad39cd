use std::collections::BTreeSet;

use serde::Deserialize;

use crate::display::Resolution;

/// Root `<monitors>` element of GNOME's monitors.xml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorsFile {
    #[serde(rename = "configuration", default)]
    pub configurations: Vec<Configuration>,
}

/// One stored layout; the file keeps several historical/alternate ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    #[serde(rename = "logicalmonitor", default)]
    pub logical_monitors: Vec<LogicalMonitor>,
}

impl Configuration {
    /// Connector ids declared by this layout's logical monitors.
    pub fn connectors(&self) -> BTreeSet<String> {
        self.logical_monitors
            .iter()
            .flat_map(|lm| lm.monitors.iter())
            .map(|m| m.monitorspec.connector.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogicalMonitor {
    pub scale: Option<f64>,
    #[serde(rename = "monitor", default)]
    pub monitors: Vec<Monitor>,
}

impl LogicalMonitor {
    pub fn scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Monitor {
    pub monitorspec: MonitorSpec,
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorSpec {
    pub connector: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Mode {
    pub width: u32,
    pub height: u32,
}

/// Per-connector facts taken from the active configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredMonitor {
    pub id: String,
    pub actual_resolution: Option<Resolution>,
    pub logical_resolution: Option<Resolution>,
    pub scale: f64,
}
