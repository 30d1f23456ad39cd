//! Parser for plain `xrandr` (no arguments) output.
//!
//! ```text
//! DP-2 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 600mm x 340mm
//!    3840x2160     60.00*+  30.00
//!    1920x1080     60.00
//! eDP-1 connected 2560x1600+1920+0 (normal left inverted right x axis y axis) 300mm x 190mm
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::display::Resolution;

static CONNECTOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+) connected (primary )?(\d+)x(\d+)\+(-?\d+)\+(-?\d+)")
        .expect("connector regex is valid")
});

static MODE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+(\d+)x(\d+)\S*\s+(.*)$").expect("mode regex is valid")
});

/// Facts gathered from one run of the enumeration command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XrandrSnapshot {
    /// Connectors that are connected and have an active geometry
    pub connected: BTreeSet<String>,
    pub primary: Option<String>,
    /// Geometry from the connector line
    pub reported: BTreeMap<String, Resolution>,
    /// Mode flagged `*` beneath the connector line
    pub actual: BTreeMap<String, Resolution>,
}

impl XrandrSnapshot {
    pub fn is_empty(&self) -> bool {
        self.connected.is_empty()
    }

    pub fn is_primary(&self, id: &str) -> bool {
        self.primary.as_deref() == Some(id)
    }
}

pub fn parse_xrandr_output(output: &str) -> XrandrSnapshot {
    let mut snapshot = XrandrSnapshot::default();
    let mut current: Option<String> = None;

    for line in output.lines() {
        let indented = line.starts_with(char::is_whitespace);

        if indented {
            if let Some(id) = current.as_ref()
                && let Some(resolution) = parse_active_mode(line)
            {
                snapshot.actual.entry(id.clone()).or_insert(resolution);
            }
            continue;
        }

        current = None;

        let Some(caps) = CONNECTOR_LINE.captures(line) else {
            continue;
        };
        let (Ok(width), Ok(height)) = (caps[3].parse::<u32>(), caps[4].parse::<u32>()) else {
            continue;
        };

        let id = caps[1].to_string();
        if caps.get(2).is_some() && snapshot.primary.is_none() {
            snapshot.primary = Some(id.clone());
        }
        snapshot
            .reported
            .insert(id.clone(), Resolution::new(width, height));
        snapshot.connected.insert(id.clone());
        current = Some(id);
    }

    snapshot
}

fn parse_active_mode(line: &str) -> Option<Resolution> {
    let caps = MODE_LINE.captures(line)?;
    if !caps[3].contains('*') {
        return None;
    }
    let width = caps[1].parse().ok()?;
    let height = caps[2].parse().ok()?;
    Some(Resolution::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUAL_HEAD: &str = "\
Screen 0: minimum 320 x 200, current 4480 x 1600, maximum 16384 x 16384
DP-1 disconnected (normal left inverted right x axis y axis)
DP-2 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 600mm x 340mm
   3840x2160     60.00*+  30.00
   1920x1080     60.00    50.00
eDP-1 connected 2560x1600+1920+0 (normal left inverted right x axis y axis) 300mm x 190mm
   2560x1600    165.00*+  60.00
   1920x1200    165.00
HDMI-1 connected (normal left inverted right x axis y axis)
   1920x1080     60.00 +
";

    #[test]
    fn test_parse_connected_set() {
        let snapshot = parse_xrandr_output(DUAL_HEAD);
        let ids: Vec<_> = snapshot.connected.iter().cloned().collect();
        assert_eq!(ids, vec!["DP-2".to_string(), "eDP-1".to_string()]);
    }

    #[test]
    fn test_parse_primary() {
        let snapshot = parse_xrandr_output(DUAL_HEAD);
        assert_eq!(snapshot.primary.as_deref(), Some("DP-2"));
        assert!(snapshot.is_primary("DP-2"));
        assert!(!snapshot.is_primary("eDP-1"));
    }

    #[test]
    fn test_parse_reported_and_actual() {
        let snapshot = parse_xrandr_output(DUAL_HEAD);
        assert_eq!(snapshot.reported["DP-2"], Resolution::new(1920, 1080));
        assert_eq!(snapshot.actual["DP-2"], Resolution::new(3840, 2160));
        assert_eq!(snapshot.reported["eDP-1"], Resolution::new(2560, 1600));
        assert_eq!(snapshot.actual["eDP-1"], Resolution::new(2560, 1600));
    }

    #[test]
    fn test_first_primary_wins() {
        let output = "\
HDMI-1 connected primary 1920x1080+0+0 (normal) 0mm x 0mm
   1920x1080     60.00*
DP-1 connected primary 2560x1440+1920+0 (normal) 0mm x 0mm
   2560x1440     144.00*+
";
        let snapshot = parse_xrandr_output(output);
        assert_eq!(snapshot.primary.as_deref(), Some("HDMI-1"));
        assert!(!snapshot.is_primary("DP-1"));
        assert_eq!(snapshot.connected.len(), 2);
    }

    #[test]
    fn test_connected_without_geometry_is_ignored() {
        let snapshot = parse_xrandr_output(DUAL_HEAD);
        assert!(!snapshot.connected.contains("HDMI-1"));
        assert!(!snapshot.actual.contains_key("HDMI-1"));
    }

    #[test]
    fn test_modes_do_not_leak_across_connectors() {
        let output = "\
DP-1 connected 1920x1080+0+0 (normal) 0mm x 0mm
   1920x1080     60.00 +
DP-3 disconnected (normal)
   1280x1024     60.02*
";
        let snapshot = parse_xrandr_output(output);
        assert!(snapshot.connected.contains("DP-1"));
        assert!(snapshot.actual.get("DP-1").is_none());
        assert!(snapshot.primary.is_none());
    }

    #[test]
    fn test_interlaced_and_suffixed_mode_names() {
        let output = "\
HDMI-A-0 connected 1920x1080+0+0 (normal) 510mm x 290mm
   1920x1080i    60.00*   50.00
";
        let snapshot = parse_xrandr_output(output);
        assert_eq!(snapshot.actual["HDMI-A-0"], Resolution::new(1920, 1080));
    }

    #[test]
    fn test_negative_offsets() {
        let output = "DP-4 connected 1280x1024+-1280+0 (normal) 0mm x 0mm\n";
        let snapshot = parse_xrandr_output(output);
        assert_eq!(snapshot.reported["DP-4"], Resolution::new(1280, 1024));
    }

    #[test]
    fn test_empty_output() {
        let snapshot = parse_xrandr_output("");
        assert!(snapshot.is_empty());
        assert!(snapshot.primary.is_none());
    }
}
