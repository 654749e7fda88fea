//! Stringifiers for the output formats.

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb};
use crate::convert::hsl_to_rgb;

/// Text format a picker reports its color in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`
    Rgb,
    /// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`
    Hsl,
}

impl ColorFormat {
    /// Look up a format by name; anything unknown is treated as hex
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "rgb" => ColorFormat::Rgb,
            "hsl" => ColorFormat::Hsl,
            "hex" => ColorFormat::Hex,
            other => {
                log::debug!("Unknown color format '{}', using hex", other);
                ColorFormat::Hex
            }
        }
    }

    /// Get the name used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl From<String> for ColorFormat {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// `#rrggbb`, lowercase. Alpha is never written.
pub fn to_hex(color: Hsl) -> String {
    let rgb = hsl_to_rgb(color);
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// `hsl(h, s%, l%)`, or `hsla(...)` when alpha is shown and below 1
pub fn to_hsl_string(color: Hsl, show_alpha: bool) -> String {
    if show_alpha && color.a < 1.0 {
        format!("hsla({}, {}%, {}%, {})", color.h, color.s, color.l, color.a)
    } else {
        format!("hsl({}, {}%, {}%)", color.h, color.s, color.l)
    }
}

/// `rgb(r, g, b)`, or `rgba(...)` when alpha is shown and below 1
pub fn to_rgb_string(rgb: Rgb, show_alpha: bool) -> String {
    if show_alpha && rgb.a < 1.0 {
        format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, rgb.a)
    } else {
        format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
    }
}

/// Render a color in the requested output format
pub fn format_color(color: Hsl, format: ColorFormat, show_alpha: bool) -> String {
    match format {
        ColorFormat::Hsl => to_hsl_string(color, show_alpha),
        ColorFormat::Rgb => to_rgb_string(hsl_to_rgb(color), show_alpha),
        ColorFormat::Hex => to_hex(color),
    }
}
