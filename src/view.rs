//! The render collaborator.
//!
//! The picker never draws anything itself. After each color change it hands
//! the view a [`ViewUpdate`], computed purely from the canonical color, and
//! the view applies it to the surface, pointer, preview, sliders, and hex
//! field.

use pickit_color::{to_hex, to_hsl_string, Hsl};

use crate::config::Position;

/// How the picker surface is presented when shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Embedded in the page, always visible
    Inline,
    /// Floating popup next to the host input
    Popup(Position),
}

/// Everything the view displays, derived from one color.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    /// Background of the saturation/lightness surface: the pure hue
    pub surface_background: String,
    /// Pointer position inside the surface, in percent (x = s, y = 100 - l)
    pub pointer: (f64, f64),
    /// Background of the preview swatch
    pub preview: String,
    /// Hue slider value
    pub hue_slider: f64,
    /// Alpha slider value (alpha * 100), `None` when alpha is hidden
    pub alpha_slider: Option<f64>,
    /// Hex field text, `None` when the field must be left alone
    pub hex_text: Option<String>,
}

impl ViewUpdate {
    /// Compute the display state for `color`
    pub fn from_color(color: Hsl, show_alpha: bool, include_text: bool) -> Self {
        Self {
            surface_background: format!("hsl({}, 100%, 50%)", color.h),
            pointer: (color.s, 100.0 - color.l),
            preview: to_hsl_string(color, show_alpha),
            hue_slider: color.h,
            alpha_slider: show_alpha.then(|| color.a * 100.0),
            hex_text: include_text.then(|| to_hex(color)),
        }
    }
}

/// Render-side operations the picker drives.
pub trait PickerView {
    /// Apply a display update
    fn render(&mut self, update: &ViewUpdate);

    /// Make the picker surface visible
    fn show(&mut self, placement: Placement);

    /// Hide the picker surface
    fn hide(&mut self);

    /// Move focus to the saturation surface. Views may defer this until
    /// the surface is actually visible.
    fn focus_surface(&mut self);

    /// Publish a polite live-region announcement
    fn announce(&mut self, message: &str);

    /// Detach listeners and remove the picker surface from the page
    fn remove(&mut self);
}
