//! Picker configuration.
//!
//! Hosts describe a picker with a [`PickerConfig`] in which every field is
//! optional (usually decoded from JSON). [`PickerOptions::resolve`] merges it
//! with the defaults once, at construction, and the picker keeps the result
//! unchanged for its lifetime.

use pickit_color::ColorFormat;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALPHA_LABEL, DEFAULT_COLOR, DEFAULT_HUE_LABEL, DEFAULT_LIGHTNESS_LABEL,
    DEFAULT_PRESETS_LABEL, DEFAULT_PRESET_COLORS, DEFAULT_SATURATION_LABEL,
};
use crate::error::PickerError;

/// Where a popup picker opens relative to its host input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Below the input, unless there is more room above
    #[default]
    Auto,
    /// Always above the input
    Above,
    /// Always below the input
    Below,
}

impl Position {
    /// Get the name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Position::Auto => "auto",
            Position::Above => "above",
            Position::Below => "below",
        }
    }

    /// Get all positions.
    pub fn all() -> &'static [Position] {
        &[Position::Auto, Position::Above, Position::Below]
    }
}

/// Per-control accessible label overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AriaLabelsConfig {
    pub hue: Option<String>,
    pub saturation: Option<String>,
    pub lightness: Option<String>,
    pub alpha: Option<String>,
    pub presets: Option<String>,
}

/// Raw picker options as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Initial color, used only when the host input starts empty
    pub default_color: Option<String>,
    /// Output format of the host value and change notifications
    pub format: Option<ColorFormat>,
    /// Expose and serialize alpha
    pub show_alpha: Option<bool>,
    /// Swatches offered for one-click selection
    pub preset_colors: Option<Vec<String>>,
    /// Always visible, never opens or closes
    pub inline: Option<bool>,
    /// Popup placement
    pub position: Option<Position>,
    /// Close after a preset is chosen
    pub close_on_select: Option<bool>,
    /// Mount point for the popup surface (document body when unset)
    pub append_to: Option<String>,
    /// Accessible label overrides
    pub aria_labels: Option<AriaLabelsConfig>,
}

impl PickerConfig {
    /// Decode a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PickerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolved accessible labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaLabels {
    pub hue: String,
    pub saturation: String,
    pub lightness: String,
    pub alpha: String,
    pub presets: String,
}

impl AriaLabels {
    fn resolve(config: AriaLabelsConfig) -> Self {
        Self {
            hue: label_or(config.hue, DEFAULT_HUE_LABEL),
            saturation: label_or(config.saturation, DEFAULT_SATURATION_LABEL),
            lightness: label_or(config.lightness, DEFAULT_LIGHTNESS_LABEL),
            alpha: label_or(config.alpha, DEFAULT_ALPHA_LABEL),
            presets: label_or(config.presets, DEFAULT_PRESETS_LABEL),
        }
    }
}

impl Default for AriaLabels {
    fn default() -> Self {
        Self::resolve(AriaLabelsConfig::default())
    }
}

/// Fully resolved picker options.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub default_color: String,
    pub format: ColorFormat,
    pub show_alpha: bool,
    pub preset_colors: Vec<String>,
    pub inline: bool,
    pub position: Position,
    pub close_on_select: bool,
    pub append_to: Option<String>,
    pub aria_labels: AriaLabels,
}

impl PickerOptions {
    /// Merge `config` with the defaults.
    ///
    /// Empty strings count as unset. An explicitly empty preset list is kept.
    pub fn resolve(config: PickerConfig) -> Self {
        Self {
            default_color: label_or(config.default_color, DEFAULT_COLOR),
            format: config.format.unwrap_or_default(),
            show_alpha: config.show_alpha.unwrap_or(false),
            preset_colors: config.preset_colors.unwrap_or_else(default_preset_colors),
            inline: config.inline.unwrap_or(false),
            position: config.position.unwrap_or_default(),
            close_on_select: config.close_on_select.unwrap_or(true),
            append_to: non_empty(config.append_to),
            aria_labels: AriaLabels::resolve(config.aria_labels.unwrap_or_default()),
        }
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self::resolve(PickerConfig::default())
    }
}

impl From<PickerConfig> for PickerOptions {
    fn from(config: PickerConfig) -> Self {
        Self::resolve(config)
    }
}

fn default_preset_colors() -> Vec<String> {
    DEFAULT_PRESET_COLORS.iter().map(|c| c.to_string()).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn label_or(value: Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}
