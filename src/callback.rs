//! Callback hooks a host registers on a picker.
//!
//! Each hook has zero or one listener, so a plain optional closure is enough;
//! there is no subscriber list.
//!
//! # Examples
//!
//! ```
//! use pickit::PickerHooks;
//!
//! let hooks = PickerHooks::new()
//!     .on_change(|color: String| println!("picked {color}"))
//!     .on_close(|| println!("closed"));
//! assert!(hooks.on_change.is_some());
//! assert!(hooks.on_open.is_none());
//! ```

use std::fmt;

/// An optional hook that receives a value.
///
/// # Type Parameters
///
/// - `T`: The value passed to the listener (e.g. the formatted color)
pub struct Callback<T> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> Callback<T> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no listener).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the listener with a value, if one is registered.
    pub fn call(&self, value: T) {
        if let Some(ref f) = self.f {
            f(value);
        }
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

/// A hook that takes no parameters, used for open/close notifications.
pub struct SideEffect {
    f: Option<Box<dyn Fn()>>,
}

impl SideEffect {
    /// Create a new side-effect callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty side-effect callback.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the side-effect callback, if it exists.
    pub fn emit(&self) {
        if let Some(ref f) = self.f {
            f();
        }
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl Default for SideEffect {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideEffect")
            .field("set", &self.is_some())
            .finish()
    }
}

/// The `onChange` / `onOpen` / `onClose` hooks of one picker.
#[derive(Debug, Default)]
pub struct PickerHooks {
    /// Receives the formatted color after every committed change
    pub on_change: Callback<String>,
    /// Fired on the Closed -> Open transition
    pub on_open: SideEffect,
    /// Fired on the Open -> Closed transition
    pub on_close: SideEffect,
}

impl PickerHooks {
    /// Hooks with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the change listener
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Callback::new(handler);
        self
    }

    /// Set the open listener
    pub fn on_open<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_open = SideEffect::new(handler);
        self
    }

    /// Set the close listener
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_close = SideEffect::new(handler);
        self
    }
}

/// One hook invocation, recorded while a picker is busy and delivered once
/// it has been released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// `on_change` with the formatted color
    Change(String),
    /// `on_open`
    Open,
    /// `on_close`
    Close,
}

impl PickerHooks {
    /// Invoke the hook matching `notification`.
    pub fn notify(&self, notification: Notification) {
        match notification {
            Notification::Change(color) => self.on_change.call(color),
            Notification::Open => self.on_open.emit(),
            Notification::Close => self.on_close.emit(),
        }
    }
}
