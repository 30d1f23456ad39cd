use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use super::errors::MonitorsXmlError;
use super::types::{Configuration, ConfiguredMonitor, MonitorsFile};
use crate::display::Resolution;

pub fn parse_monitors_xml(contents: &str) -> Result<MonitorsFile, MonitorsXmlError> {
    quick_xml::de::from_str(contents).map_err(|e| MonitorsXmlError::ParseError {
        message: e.to_string(),
    })
}

/// Pick the first configuration whose connector set equals `connected`.
///
/// Subsets and supersets never match.
pub fn select_configuration<'a>(
    file: &'a MonitorsFile,
    connected: &BTreeSet<String>,
) -> Option<&'a Configuration> {
    if connected.is_empty() {
        return None;
    }
    file.configurations
        .iter()
        .find(|config| config.connectors() == *connected)
}

/// Flatten a configuration into one entry per connector.
///
/// Logical resolution is the physical mode multiplied by the logical
/// monitor's scale, rounded per axis.
pub fn configured_monitors(config: &Configuration) -> Vec<ConfiguredMonitor> {
    let mut seen = BTreeSet::new();
    let mut result = Vec::new();

    for logical in &config.logical_monitors {
        let scale = logical.scale();
        for monitor in &logical.monitors {
            let id = monitor.monitorspec.connector.clone();
            if !seen.insert(id.clone()) {
                continue;
            }
            let actual = monitor
                .mode
                .map(|mode| Resolution::new(mode.width, mode.height));
            result.push(ConfiguredMonitor {
                id,
                actual_resolution: actual,
                logical_resolution: actual.map(|r| r.scaled(scale)),
                scale,
            });
        }
    }

    result
}

/// Read `path` and return the monitors of the configuration matching
/// `connected`, or an empty list when none matches.
pub fn load_active_configuration(
    path: &Path,
    connected: &BTreeSet<String>,
) -> Result<Vec<ConfiguredMonitor>, MonitorsXmlError> {
    info!(event = "core.monitors_xml.load_started", path = %path.display());

    if !path.exists() {
        return Err(MonitorsXmlError::NotFound {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| MonitorsXmlError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let file = parse_monitors_xml(&contents)?;

    let Some(config) = select_configuration(&file, connected) else {
        debug!(
            event = "core.monitors_xml.no_matching_configuration",
            configurations = file.configurations.len(),
            connected = ?connected
        );
        return Ok(Vec::new());
    };

    let monitors = configured_monitors(config);
    info!(
        event = "core.monitors_xml.load_completed",
        monitors = monitors.len()
    );
    Ok(monitors)
}
