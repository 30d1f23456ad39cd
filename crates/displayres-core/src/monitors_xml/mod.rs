//! GNOME `monitors.xml` parsing and active-configuration selection.

mod errors;
mod parser;
mod types;

pub use errors::MonitorsXmlError;
pub use parser::{
    configured_monitors, load_active_configuration, parse_monitors_xml, select_configuration,
};
pub use types::{
    Configuration, ConfiguredMonitor, LogicalMonitor, Mode, Monitor, MonitorSpec, MonitorsFile,
};
