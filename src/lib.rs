//! pickit - keyboard-accessible color picker core
//!
//! This crate keeps a hue slider, alpha slider, saturation/lightness surface,
//! hex field, preset swatches, and the bound host input in sync with one
//! canonical color. Drawing and DOM event wiring live outside the crate,
//! behind the [`PickerView`] and [`HostInput`] traits.
//!
//! ```
//! use pickit::{ColorFormat, Hsl, ColorModel};
//!
//! let mut model = ColorModel::new(Hsl::default(), ColorFormat::Rgb, false);
//! assert!(model.apply("#3b82f6"));
//! assert_eq!(model.formatted(), "rgb(59, 130, 246)");
//! ```

mod announce;
mod callback;
mod config;
mod constants;
mod error;
mod event;
mod host;
mod picker;
mod registry;
mod view;

#[cfg(test)]
mod tests;

pub use announce::{announcement_text, Announcer};
pub use callback::{Callback, Notification, PickerHooks, SideEffect};
pub use config::{AriaLabels, AriaLabelsConfig, PickerConfig, PickerOptions, Position};
pub use constants::*;
pub use error::PickerError;
pub use event::{EventResult, Key, KeyModifiers, PickerEvent, Point, SurfaceRect};
pub use host::{HostId, HostInput, HostResolver, HostTarget};
pub use picker::{ColorPicker, PickerDragging, PickerHandle, PickerState, Visibility};
pub use registry::PickerRegistry;
pub use view::{PickerView, Placement, ViewUpdate};

// Re-export the color model so hosts need only one dependency
pub use pickit_color::{
    format_color, hsl_to_rgb, is_strict_hex, normalize_hue, parse_color, rgb_to_hsl, to_hex, to_hsl_string,
    to_rgb_string, ColorFormat, ColorModel, ColorParseError, Hsl, Rgb,
};
