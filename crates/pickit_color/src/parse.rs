//! Parsers for textual color notations.
//!
//! Accepted forms, tried in this order:
//! - `#RRGGBB` / `#RRGGBBAA`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)`
//! - `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::{Hsl, Rgb};
use crate::convert::rgb_to_hsl;
use crate::error::ColorParseError;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").expect("valid regex")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$")
        .expect("valid regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*([0-9]+(?:\.[0-9]+)?)\s*,\s*([0-9]+(?:\.[0-9]+)?)%\s*,\s*([0-9]+(?:\.[0-9]+)?)%\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .expect("valid regex")
});

/// True for text typed in full `#RRGGBB` or `#RRGGBBAA` form
pub fn is_strict_hex(text: &str) -> bool {
    HEX_RE.is_match(text)
}

/// Parse a color string into HSL.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_color(text: &str) -> Result<Hsl, ColorParseError> {
    let text = text.trim();

    if text.starts_with('#') {
        return parse_hex(text);
    }
    if let Some(caps) = RGB_RE.captures(text) {
        return parse_rgb(&caps);
    }
    if let Some(caps) = HSL_RE.captures(text) {
        return parse_hsl(&caps);
    }

    Err(ColorParseError::unrecognized(text))
}

fn parse_hex(text: &str) -> Result<Hsl, ColorParseError> {
    if !is_strict_hex(text) {
        return Err(ColorParseError::invalid_hex(text));
    }
    let digits = &text[1..];
    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorParseError::invalid_hex(text))
    };

    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if digits.len() == 8 {
        f64::from(byte(6)?) / 255.0
    } else {
        1.0
    };

    Ok(rgb_to_hsl(Rgb::with_alpha(r, g, b, a)))
}

fn parse_rgb(caps: &Captures<'_>) -> Result<Hsl, ColorParseError> {
    let channel = |index: usize, name: &'static str| {
        let raw = &caps[index];
        raw.parse::<u8>()
            .map_err(|_| ColorParseError::ChannelOutOfRange {
                channel: name,
                value: raw.to_string(),
            })
    };

    let r = channel(1, "r")?;
    let g = channel(2, "g")?;
    let b = channel(3, "b")?;
    let a = alpha(caps.get(4).map(|m| m.as_str()));

    Ok(rgb_to_hsl(Rgb::with_alpha(r, g, b, a)))
}

fn parse_hsl(caps: &Captures<'_>) -> Result<Hsl, ColorParseError> {
    // The regex only admits plain decimals, so these parses cannot fail
    let number = |index: usize| caps[index].parse::<f64>().unwrap_or(0.0);

    let color = Hsl {
        h: number(1),
        s: number(2),
        l: number(3),
        a: alpha(caps.get(4).map(|m| m.as_str())),
    };
    Ok(color.clamped())
}

fn alpha(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.parse::<f64>().ok())
        .map(|a| a.clamp(0.0, 1.0))
        .unwrap_or(1.0)
}
