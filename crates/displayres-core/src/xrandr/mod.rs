//! Connected-display enumeration via `xrandr`.

mod errors;
mod parser;
mod source;

pub use errors::XrandrError;
pub use parser::{XrandrSnapshot, parse_xrandr_output};
pub use source::{DisplaySource, XrandrCommand, enumerate_displays};
