use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("displayres")
        .about("Query connected displays and their resolutions via xrandr and GNOME's monitors.xml")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("display")
                .short('d')
                .long("display")
                .value_name("ID")
                .help("Display identifier (e.g. DP-2, eDP-1-1) to get its resolution and scaling info"),
        )
        .arg(
            Arg::new("primary")
                .short('p')
                .long("primary")
                .help("Print the primary display identifier")
                .action(ArgAction::SetTrue)
                .conflicts_with("display"),
        )
        .arg(
            Arg::new("raw")
                .short('r')
                .long("raw")
                .help("Print the display records as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("monitors-xml")
                .long("monitors-xml")
                .value_name("PATH")
                .help("Read monitor layouts from PATH instead of ~/.config/monitors.xml"),
        )
        .arg(
            Arg::new("xrandr")
                .long("xrandr")
                .value_name("COMMAND")
                .help("Display enumeration command to run instead of xrandr"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Configuration file (default: ~/.config/displayres/config.toml)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_display_flag() {
        let matches = build_cli()
            .try_get_matches_from(vec!["displayres", "-d", "DP-2"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("display").map(String::as_str),
            Some("DP-2")
        );
        assert!(!matches.get_flag("primary"));
    }

    #[test]
    fn test_cli_primary_and_raw() {
        let matches = build_cli()
            .try_get_matches_from(vec!["displayres", "--primary", "-r", "-v"])
            .unwrap();
        assert!(matches.get_flag("primary"));
        assert!(matches.get_flag("raw"));
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_primary_conflicts_with_display() {
        let result = build_cli().try_get_matches_from(vec!["displayres", "-p", "-d", "DP-2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_source_overrides() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "displayres",
                "--monitors-xml",
                "/tmp/monitors.xml",
                "--xrandr",
                "/opt/bin/xrandr",
            ])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("monitors-xml").map(String::as_str),
            Some("/tmp/monitors.xml")
        );
        assert_eq!(
            matches.get_one::<String>("xrandr").map(String::as_str),
            Some("/opt/bin/xrandr")
        );
    }
}
