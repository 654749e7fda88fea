//! Error types for picker construction.

use thiserror::Error;

/// Errors that can occur while setting up a picker.
///
/// Interaction never fails: unparseable input is ignored and the picker
/// keeps its color.
#[derive(Error, Debug)]
pub enum PickerError {
    /// The host input reference did not resolve to an element
    #[error("Host input not found: {target}")]
    HostNotFound {
        /// The selector or element key that failed to resolve
        target: String,
    },

    /// Picker configuration could not be decoded
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PickerError {
    /// Create a host-not-found error.
    pub fn host_not_found(target: impl ToString) -> Self {
        Self::HostNotFound {
            target: target.to_string(),
        }
    }
}
