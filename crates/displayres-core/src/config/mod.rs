//! TOML configuration: resolver sources and window frame sizes.

mod errors;
mod loading;
mod types;

pub use errors::ConfigError;
pub use loading::{default_config_path, load_config, load_config_with_warning, parse_config};
pub use types::{DEFAULT_XRANDR_COMMAND, DisplayresConfig, ResolverConfig, WindowFrame};
