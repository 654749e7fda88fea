//! Raw input events delivered by the DOM layer.

/// A pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the saturation/lightness surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    /// Create a new rect
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Position of `point` inside the rect as fractions (0.0-1.0) of width
    /// and height, clamped to the edges.
    ///
    /// Returns `None` for a rect with no area, or when any coordinate is not
    /// finite.
    pub fn fraction(&self, point: Point) -> Option<(f64, f64)> {
        let coords = [point.x, point.y, self.left, self.top, self.width, self.height];
        if !coords.iter().all(|c| c.is_finite()) {
            return None;
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let x = (point.x - self.left).clamp(0.0, self.width);
        let y = (point.y - self.top).clamp(0.0, self.height);
        Some((x / self.width, y / self.height))
    }
}

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    Char(char),
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    /// No modifiers held
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Only Shift held
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// One discrete input, in the order the DOM layer observed it.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// Click on the host input
    HostClick,
    /// The host input fired `change`
    HostChange,
    /// Hue slider moved (raw slider value, 0-360)
    HueInput(f64),
    /// Alpha slider moved (raw slider value, 0-100)
    AlphaInput(f64),
    /// Pointer pressed on the saturation surface
    SurfacePointerDown { position: Point, rect: SurfaceRect },
    /// Pointer moved anywhere in the document
    SurfacePointerMove { position: Point, rect: SurfaceRect },
    /// Pointer released anywhere in the document
    SurfacePointerUp,
    /// Key pressed while the saturation surface has focus
    SurfaceKey { key: Key, modifiers: KeyModifiers },
    /// Text typed into the hex field
    HexInput(String),
    /// Preset swatch clicked (index into the configured presets)
    PresetClick(usize),
    /// Pointer pressed anywhere in the document
    DocumentPointerDown { inside_picker: bool, on_host: bool },
    /// Key pressed anywhere in the document
    DocumentKey { key: Key },
}

/// What handling an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResult {
    /// The canonical color was replaced
    pub color_changed: bool,
    /// The picker went from Closed to Open
    pub opened: bool,
    /// The picker went from Open to Closed
    pub closed: bool,
}

impl EventResult {
    /// Nothing happened
    pub const NONE: Self = Self {
        color_changed: false,
        opened: false,
        closed: false,
    };

    /// Result for a color operation
    pub fn color(changed: bool) -> Self {
        Self {
            color_changed: changed,
            ..Self::NONE
        }
    }

    /// Result for an open attempt
    pub fn open(opened: bool) -> Self {
        Self {
            opened,
            ..Self::NONE
        }
    }

    /// Result for a close attempt
    pub fn close(closed: bool) -> Self {
        Self {
            closed,
            ..Self::NONE
        }
    }

    /// Combine two results
    pub fn and(self, other: Self) -> Self {
        Self {
            color_changed: self.color_changed || other.color_changed,
            opened: self.opened || other.opened,
            closed: self.closed || other.closed,
        }
    }

    /// Check if the event had no effect
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
