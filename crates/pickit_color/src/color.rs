//! Color value types

use serde::{Deserialize, Serialize};

/// Hue in degrees
pub const HUE_MAX: f64 = 360.0;
/// Upper bound for saturation and lightness percentages
pub const PERCENT_MAX: f64 = 100.0;

/// Canonical picker color.
///
/// - `h`: hue in degrees (0-360, exclusive)
/// - `s`: saturation percent (0-100)
/// - `l`: lightness percent (0-100)
/// - `a`: alpha (0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsl {
    /// Create an opaque color
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Create a color with explicit alpha
    pub const fn with_alpha(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Clamp every field into its valid range
    pub fn clamped(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: self.s.clamp(0.0, PERCENT_MAX),
            l: self.l.clamp(0.0, PERCENT_MAX),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// True when the color has no hue information (saturation is zero)
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }
}

/// Clamp a hue to 0-360 and fold 360 onto 0, which names the same hue.
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.clamp(0.0, HUE_MAX);
    if h >= HUE_MAX {
        0.0
    } else {
        h
    }
}

impl Default for Hsl {
    /// Pure red, matching the picker's state before any color is parsed
    fn default() -> Self {
        Self::new(0.0, 100.0, 50.0)
    }
}

/// 8-bit RGB triplet with alpha, only used as a conversion intermediate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgb {
    /// Create an opaque RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an RGB color with explicit alpha
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as an array
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
