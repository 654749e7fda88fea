//! Error types for color parsing.

use thiserror::Error;

/// Reasons a color string was not accepted.
///
/// The picker itself never surfaces these to the user; it keeps the color it
/// already holds. They exist so callers of [`crate::parse_color`] can tell
/// a typo from an out-of-range value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// `#` prefix present but not followed by exactly 6 or 8 hex digits
    #[error("Invalid hex color: {input}")]
    InvalidHex {
        /// The rejected text
        input: String,
    },

    /// An `rgb()`/`rgba()` channel above 255
    #[error("RGB channel {channel} out of range: {value}")]
    ChannelOutOfRange {
        /// Channel name (`r`, `g` or `b`)
        channel: &'static str,
        /// The value as written
        value: String,
    },

    /// Text is not in any supported notation
    #[error("Unrecognized color: {input}")]
    Unrecognized {
        /// The rejected text
        input: String,
    },
}

impl ColorParseError {
    /// Create an invalid hex error.
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }

    /// Create an unrecognized color error.
    pub fn unrecognized(input: impl Into<String>) -> Self {
        Self::Unrecognized {
            input: input.into(),
        }
    }
}
