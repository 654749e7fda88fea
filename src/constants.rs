//! Picker defaults and interaction constants.

use std::time::Duration;

// =============================================================================
// Option defaults
// =============================================================================

/// Color used when the host input starts empty
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Preset swatches shown when none are configured
pub const DEFAULT_PRESET_COLORS: [&str; 8] = [
    "#ef4444", // Red
    "#f59e0b", // Amber
    "#10b981", // Emerald
    "#3b82f6", // Blue
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#000000", // Black
    "#ffffff", // White
];

/// Default accessible label for the hue slider
pub const DEFAULT_HUE_LABEL: &str = "Hue";
/// Default accessible label for the saturation/lightness surface
pub const DEFAULT_SATURATION_LABEL: &str = "Saturation and Lightness";
/// Default accessible label for lightness
pub const DEFAULT_LIGHTNESS_LABEL: &str = "Lightness";
/// Default accessible label for the alpha slider
pub const DEFAULT_ALPHA_LABEL: &str = "Alpha";
/// Default accessible label for the preset group
pub const DEFAULT_PRESETS_LABEL: &str = "Preset colors";

// =============================================================================
// Interaction
// =============================================================================

/// Saturation/lightness change per arrow key press
pub const KEY_STEP: f64 = 1.0;

/// Saturation/lightness change per arrow key press with Shift held
pub const KEY_STEP_LARGE: f64 = 10.0;

/// Upper bound of the hue slider
pub const HUE_SLIDER_MAX: f64 = 360.0;

/// Upper bound of the alpha slider (alpha is slider / 100)
pub const ALPHA_SLIDER_MAX: f64 = 100.0;

/// Quiet period before a color change is announced to assistive technology
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Prefix of the announcement text
pub const ANNOUNCE_PREFIX: &str = "Color changed to";
