//! pickit_color - color model for the pickit color picker
//!
//! Holds the canonical HSL color representation together with the parsers,
//! conversions, and stringifiers that every picker view is derived from.

mod color;
mod convert;
mod error;
mod format;
mod model;
mod parse;

pub use color::{normalize_hue, Hsl, Rgb};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::ColorParseError;
pub use format::{format_color, to_hex, to_hsl_string, to_rgb_string, ColorFormat};
pub use model::ColorModel;
pub use parse::{is_strict_hex, parse_color};
