use std::collections::BTreeSet;

use tracing::{info, warn};

use super::errors::DisplayError;
use super::types::{MonitorRecord, ScaleFactor};
use crate::config::ResolverConfig;
use crate::errors::DisplayresError;
use crate::monitors_xml::{ConfiguredMonitor, MonitorsXmlError, load_active_configuration};
use crate::xrandr::{DisplaySource, XrandrCommand, XrandrSnapshot, enumerate_displays};

/// Query all connected displays using the configured sources.
///
/// Never fails: a missing `xrandr` yields an empty list and a missing or
/// unusable monitors.xml yields xrandr-only records.
pub fn resolve_displays(config: &ResolverConfig) -> Vec<MonitorRecord> {
    let source = XrandrCommand::new(&config.xrandr_command);
    resolve_with_source(&source, config)
}

/// Same as [`resolve_displays`] with an explicit display source.
pub fn resolve_with_source(
    source: &dyn DisplaySource,
    config: &ResolverConfig,
) -> Vec<MonitorRecord> {
    info!(event = "core.display.resolve_started", source = source.name());

    let snapshot = match enumerate_displays(source) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(
                event = "core.display.enumeration_unavailable",
                error_code = e.error_code(),
                error = %e
            );
            return Vec::new();
        }
    };

    if snapshot.is_empty() {
        info!(event = "core.display.resolve_completed", count = 0);
        return Vec::new();
    }

    let configured = match active_configuration(config, &snapshot.connected) {
        Ok(monitors) => monitors,
        Err(e) => {
            warn!(
                event = "core.display.monitors_xml_unavailable",
                error_code = e.error_code(),
                error = %e
            );
            Vec::new()
        }
    };

    let records = merge_records(&snapshot, configured);
    info!(
        event = "core.display.resolve_completed",
        count = records.len(),
        primary = ?snapshot.primary
    );
    records
}

fn active_configuration(
    config: &ResolverConfig,
    connected: &BTreeSet<String>,
) -> Result<Vec<ConfiguredMonitor>, MonitorsXmlError> {
    let path = config
        .monitors_xml_path()
        .ok_or(MonitorsXmlError::NoConfigDir)?;
    load_active_configuration(&path, connected)
}

/// Reconcile xrandr facts with monitors from the active configuration.
///
/// Every connected connector appears exactly once; configured monitors that
/// xrandr does not report as connected are dropped. Output is sorted by id.
pub fn merge_records(
    snapshot: &XrandrSnapshot,
    configured: Vec<ConfiguredMonitor>,
) -> Vec<MonitorRecord> {
    let mut records: Vec<MonitorRecord> = Vec::with_capacity(snapshot.connected.len());

    for monitor in configured {
        if !snapshot.connected.contains(&monitor.id)
            || records.iter().any(|r| r.id == monitor.id)
        {
            continue;
        }

        let actual = monitor
            .actual_resolution
            .or_else(|| snapshot.actual.get(&monitor.id).copied());
        let logical = monitor
            .logical_resolution
            .or_else(|| actual.map(|r| r.scaled(monitor.scale)));

        records.push(MonitorRecord {
            is_primary: snapshot.is_primary(&monitor.id),
            reported_resolution: snapshot.reported.get(&monitor.id).copied(),
            actual_resolution: actual,
            logical_resolution: logical,
            scale_factor: ScaleFactor::Configured(monitor.scale),
            id: monitor.id,
        });
    }

    for id in &snapshot.connected {
        if records.iter().any(|r| &r.id == id) {
            continue;
        }
        let reported = snapshot.reported.get(id).copied();
        records.push(MonitorRecord {
            id: id.clone(),
            is_primary: snapshot.is_primary(id),
            actual_resolution: snapshot.actual.get(id).copied(),
            logical_resolution: reported,
            reported_resolution: reported,
            scale_factor: ScaleFactor::XrandrOnly,
        });
    }

    records.sort_by(|a, b| a.id.cmp(&b.id));
    records
}

/// Look up one connector, distinguishing "nothing connected" from a miss.
pub fn find_display<'a>(
    records: &'a [MonitorRecord],
    id: &str,
) -> Result<&'a MonitorRecord, DisplayError> {
    if records.is_empty() {
        return Err(DisplayError::NoDisplays);
    }
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| DisplayError::DisplayNotFound { id: id.to_string() })
}

pub fn primary_display(records: &[MonitorRecord]) -> Option<&MonitorRecord> {
    records.iter().find(|r| r.is_primary)
}
