//! HSL <-> RGB conversion.
//!
//! `rgb_to_hsl` rounds its output to tenths of a degree/percent. At that
//! precision every 8-bit RGB triple survives `hsl_to_rgb(rgb_to_hsl(rgb))`
//! unchanged, while the HSL values stay short enough to print.

use crate::color::{normalize_hue, Hsl, Rgb, HUE_MAX};

/// Decimal places kept by `rgb_to_hsl` (as a power of ten)
const HSL_PRECISION: f64 = 10.0;

fn round_hsl(value: f64) -> f64 {
    (value * HSL_PRECISION).round() / HSL_PRECISION
}

fn round_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB color to HSL
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: normalize_hue(round_hsl(h * HUE_MAX)),
        s: round_hsl(s * 100.0),
        l: round_hsl(l * 100.0),
        a: rgb.a,
    }
}

/// Map one hue phase onto a channel intensity
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert an HSL color to 8-bit RGB
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / HUE_MAX;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: round_channel(r),
        g: round_channel(g),
        b: round_channel(b),
        a: hsl.a,
    }
}
