//! Interaction state of one picker.

/// Visibility of the picker surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// What the pointer is currently dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerDragging {
    /// Not dragging
    #[default]
    None,
    /// Dragging across the saturation/lightness surface
    Surface,
}

/// Open/closed state plus the active drag, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerState {
    pub visibility: Visibility,
    pub dragging: PickerDragging,
}

impl PickerState {
    /// Check if the picker is open
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging != PickerDragging::None
    }

    /// Start dragging
    pub fn start_drag(&mut self, target: PickerDragging) {
        self.dragging = target;
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        self.dragging = PickerDragging::None;
    }
}
