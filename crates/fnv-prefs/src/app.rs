use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("fnv-prefs")
        .about(
            "Modify Fallout New Vegas FalloutPrefs.ini to fit the game to your primary display in windowed mode",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("prefs-path")
                .value_name("FALLOUT_PREFS_PATH")
                .help("Full path to FalloutPrefs.ini; located automatically when omitted"),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .help("Write changes to the file; by default a dry run is performed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("steam-path")
                .short('s')
                .long("steam-path")
                .value_name("DIR")
                .help("Root of your Steam installation (e.g. ~/.local/share/Steam), used for auto-detection"),
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
                .action(ArgAction::SetTrue),
        )
}
