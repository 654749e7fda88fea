//! The canonical color value plus its serialization settings.

use crate::color::Hsl;
use crate::convert::hsl_to_rgb;
use crate::format::{format_color, to_hex, to_hsl_string, to_rgb_string, ColorFormat};
use crate::parse::parse_color;

/// Owns one canonical [`Hsl`] color and knows how to read and write it as text.
///
/// Every displayed representation of the color is derived from the value
/// held here; nothing else stores color state.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModel {
    color: Hsl,
    format: ColorFormat,
    show_alpha: bool,
}

impl ColorModel {
    /// Create a model holding `color`
    pub fn new(color: Hsl, format: ColorFormat, show_alpha: bool) -> Self {
        Self {
            color,
            format,
            show_alpha,
        }
    }

    /// The canonical color
    pub fn color(&self) -> Hsl {
        self.color
    }

    /// Replace the canonical color
    pub fn set_color(&mut self, color: Hsl) {
        self.color = color;
    }

    /// Configured output format
    pub fn output_format(&self) -> ColorFormat {
        self.format
    }

    /// Whether alpha is exposed and serialized
    pub fn show_alpha(&self) -> bool {
        self.show_alpha
    }

    /// Parse `text`, falling back to the held color when it is not a color
    pub fn parse(&self, text: &str) -> Hsl {
        match parse_color(text) {
            Ok(color) => color,
            Err(err) => {
                log::debug!("ColorModel: keeping current color ({})", err);
                self.color
            }
        }
    }

    /// Parse `text` into the model. Returns false and leaves the color
    /// untouched when `text` is not a color.
    pub fn apply(&mut self, text: &str) -> bool {
        match parse_color(text) {
            Ok(color) => {
                self.color = color;
                true
            }
            Err(err) => {
                log::debug!("ColorModel: ignoring input ({})", err);
                false
            }
        }
    }

    /// Held color in the configured output format
    pub fn formatted(&self) -> String {
        self.format(self.color)
    }

    /// Any color in the configured output format
    pub fn format(&self, color: Hsl) -> String {
        format_color(color, self.format, self.show_alpha)
    }

    /// `#rrggbb` for the held color
    pub fn to_hex(&self) -> String {
        to_hex(self.color)
    }

    /// `hsl()`/`hsla()` for the held color
    pub fn to_hsl_string(&self) -> String {
        to_hsl_string(self.color, self.show_alpha)
    }

    /// `rgb()`/`rgba()` for the held color
    pub fn to_rgb_string(&self) -> String {
        to_rgb_string(hsl_to_rgb(self.color), self.show_alpha)
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(Hsl::default(), ColorFormat::default(), false)
    }
}
