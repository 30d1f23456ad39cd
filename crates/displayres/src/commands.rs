use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info, warn};

use displayres_core::config::{ResolverConfig, load_config_with_warning};
use displayres_core::display::{
    DisplayError, MonitorRecord, find_display, format_resolution, primary_display,
    resolve_displays,
};
use displayres_core::events;

use crate::color;

const SOURCES_NOTE: &str = "Note: displayres requires xrandr and a running X11 session.";

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let resolver = resolver_config(matches);
    let raw = matches.get_flag("raw");

    info!(
        event = "cli.query_started",
        xrandr = resolver.xrandr_command,
        monitors_xml = ?resolver.monitors_xml
    );

    let records = resolve_displays(&resolver);

    if matches.get_flag("primary") {
        handle_primary(&records);
    } else if let Some(id) = matches.get_one::<String>("display") {
        handle_single(&records, id, raw)?;
    } else {
        handle_all(&records, raw)?;
    }

    info!(event = "cli.query_completed", count = records.len());
    Ok(())
}

/// Config file values, then command-line overrides.
fn resolver_config(matches: &ArgMatches) -> ResolverConfig {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut resolver = load_config_with_warning(config_path.as_deref()).resolver;

    if let Some(command) = matches.get_one::<String>("xrandr") {
        resolver = resolver.with_xrandr_command(command);
    }
    if let Some(path) = matches.get_one::<String>("monitors-xml") {
        resolver = resolver.with_monitors_xml(path);
    }
    resolver
}

fn handle_primary(records: &[MonitorRecord]) {
    match primary_display(records) {
        Some(primary) => println!("Primary Display: {}", color::ice(&primary.id)),
        None => {
            warn!(event = "cli.primary_not_found", count = records.len());
            println!("No primary display found.");
        }
    }
}

fn handle_single(
    records: &[MonitorRecord],
    id: &str,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match find_display(records, id) {
        Ok(record) => {
            if raw {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                println!("Display: {}", color::ice(&record.id));
                for line in record_lines(record) {
                    println!("{}", line);
                }
            }
            info!(event = "cli.display_found", id = id);
        }
        Err(e) => {
            match &e {
                DisplayError::NoDisplays => println!("No connected displays found."),
                DisplayError::DisplayNotFound { .. } => println!("Error: {}.", e),
            }
            println!("{}", SOURCES_NOTE);
            error!(event = "cli.display_lookup_failed", id = id, error = %e);
            events::log_app_error(&e);
        }
    }
    Ok(())
}

fn handle_all(records: &[MonitorRecord], raw: bool) -> Result<(), Box<dyn std::error::Error>> {
    if raw {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for line in listing_lines(records) {
        println!("{}", line);
    }
    Ok(())
}

/// Full listing of every record; the header is printed even when empty.
fn listing_lines(records: &[MonitorRecord]) -> Vec<String> {
    let mut lines = vec![
        "---".to_string(),
        "Currently Connected Displays:".to_string(),
        "---".to_string(),
    ];

    if records.is_empty() {
        lines.push("No connected displays found.".to_string());
        lines.push(SOURCES_NOTE.to_string());
        return lines;
    }

    let separator = color::muted(&"-".repeat(20));
    for record in records {
        let status = if record.is_primary {
            format!(" {}", color::aurora("(Primary)"))
        } else {
            String::new()
        };
        lines.push(format!("ID: {}{}", color::ice(&record.id), status));
        lines.extend(record_lines(record));
        lines.push(separator.clone());
    }

    lines.push(String::new());
    lines.push(primary_line(records));
    lines
}

/// Indented detail lines of one record.
fn record_lines(record: &MonitorRecord) -> Vec<String> {
    vec![
        format!(
            "  Configured/Actual Resolution: {}",
            format_resolution(record.actual_resolution)
        ),
        format!(
            "  Logical/Rendered Resolution (Gnome): {}",
            format_resolution(record.logical_resolution)
        ),
        format!(
            "  xrandr Reported Resolution: {}",
            format_resolution(record.reported_resolution)
        ),
        format!("  Gnome UI Scale Factor: {}", record.scale_factor),
    ]
}

fn primary_line(records: &[MonitorRecord]) -> String {
    match primary_display(records) {
        Some(primary) => format!("Primary Display ID: {}", primary.id),
        None => "No primary display identified.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;
    use displayres_core::display::{Resolution, ScaleFactor};

    fn sample_records() -> Vec<MonitorRecord> {
        vec![
            MonitorRecord {
                id: "DP-2".to_string(),
                is_primary: true,
                actual_resolution: Some(Resolution::new(3840, 2160)),
                logical_resolution: Some(Resolution::new(7680, 4320)),
                reported_resolution: Some(Resolution::new(1920, 1080)),
                scale_factor: ScaleFactor::Configured(2.0),
            },
            MonitorRecord {
                id: "HDMI-1".to_string(),
                is_primary: false,
                actual_resolution: None,
                logical_resolution: Some(Resolution::new(1280, 1024)),
                reported_resolution: Some(Resolution::new(1280, 1024)),
                scale_factor: ScaleFactor::XrandrOnly,
            },
        ]
    }

    #[test]
    fn test_record_lines() {
        let records = sample_records();
        let lines = record_lines(&records[0]);
        assert_eq!(lines[0], "  Configured/Actual Resolution: 3840x2160");
        assert_eq!(lines[1], "  Logical/Rendered Resolution (Gnome): 7680x4320");
        assert_eq!(lines[2], "  xrandr Reported Resolution: 1920x1080");
        assert_eq!(lines[3], "  Gnome UI Scale Factor: 2.0x");
    }

    #[test]
    fn test_record_lines_fallback() {
        let records = sample_records();
        let lines = record_lines(&records[1]);
        assert_eq!(lines[0], "  Configured/Actual Resolution: N/A");
        assert!(lines[3].contains("xrandr only"));
    }

    #[test]
    fn test_primary_line() {
        let records = sample_records();
        assert_eq!(primary_line(&records), "Primary Display ID: DP-2");
        assert_eq!(primary_line(&records[1..]), "No primary display identified.");
    }

    #[test]
    fn test_listing_prints_header_when_empty() {
        let lines = listing_lines(&[]);
        assert_eq!(
            lines,
            vec![
                "---".to_string(),
                "Currently Connected Displays:".to_string(),
                "---".to_string(),
                "No connected displays found.".to_string(),
                SOURCES_NOTE.to_string(),
            ]
        );
    }

    #[test]
    fn test_listing_ends_with_primary_line() {
        let records = sample_records();
        let lines = listing_lines(&records);
        assert_eq!(lines[1], "Currently Connected Displays:");
        assert_eq!(lines.last().unwrap(), "Primary Display ID: DP-2");
    }

    #[test]
    fn test_handle_single_miss_is_not_an_error() {
        let records = sample_records();
        assert!(handle_single(&records, "eDP-9", false).is_ok());
        assert!(handle_single(&[], "eDP-9", false).is_ok());
    }

    #[test]
    fn test_resolver_config_overrides() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "displayres",
                "--config",
                "/nonexistent/displayres/config.toml",
                "--xrandr",
                "my-xrandr",
                "--monitors-xml",
                "/tmp/m.xml",
            ])
            .unwrap();
        let resolver = resolver_config(&matches);
        assert_eq!(resolver.xrandr_command, "my-xrandr");
        assert_eq!(resolver.monitors_xml, Some(PathBuf::from("/tmp/m.xml")));
    }
}
