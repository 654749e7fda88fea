//! Shared access to a registered picker.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pickit_color::Hsl;
use web_time::Instant;

use super::{ColorPicker, PickerState};
use crate::callback::{Notification, PickerHooks};
use crate::config::PickerOptions;
use crate::event::{EventResult, Key, KeyModifiers, PickerEvent, Point, SurfaceRect};
use crate::host::HostId;

/// Cloneable handle to one picker and its hooks.
///
/// Every operation borrows the picker only for its own duration. Hooks run
/// after the borrow ends, in the order the operation queued them, so a hook
/// may call back into any handle, including its own.
#[derive(Clone)]
pub struct PickerHandle {
    picker: Rc<RefCell<ColorPicker>>,
    hooks: Rc<PickerHooks>,
}

impl PickerHandle {
    pub(crate) fn new(picker: ColorPicker, hooks: PickerHooks) -> Self {
        Self {
            picker: Rc::new(RefCell::new(picker)),
            hooks: Rc::new(hooks),
        }
    }

    /// Check if two handles refer to the same picker
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.picker, &b.picker)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn host_id(&self) -> HostId {
        self.read(ColorPicker::host_id)
    }

    pub fn options(&self) -> PickerOptions {
        self.read(|p| p.options().clone())
    }

    pub fn color(&self) -> Hsl {
        self.read(ColorPicker::color)
    }

    pub fn state(&self) -> PickerState {
        self.read(ColorPicker::state)
    }

    pub fn is_open(&self) -> bool {
        self.read(ColorPicker::is_open)
    }

    pub fn is_destroyed(&self) -> bool {
        self.read(ColorPicker::is_destroyed)
    }

    pub fn get_color(&self) -> String {
        self.read(ColorPicker::get_color)
    }

    pub fn announcement_pending(&self) -> bool {
        self.read(ColorPicker::announcement_pending)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    pub fn open(&self) -> bool {
        self.update(ColorPicker::open)
    }

    pub fn close(&self) -> bool {
        self.update(ColorPicker::close)
    }

    pub fn toggle(&self) -> EventResult {
        self.update(ColorPicker::toggle)
    }

    pub fn set_color(&self, text: &str) -> bool {
        self.update(|p| p.set_color(text))
    }

    pub fn host_changed(&self) -> bool {
        self.update(ColorPicker::host_changed)
    }

    pub fn set_hue(&self, value: f64) -> bool {
        self.update(|p| p.set_hue(value))
    }

    pub fn set_alpha(&self, value: f64) -> bool {
        self.update(|p| p.set_alpha(value))
    }

    pub fn drag_to(&self, position: Point, rect: SurfaceRect) -> bool {
        self.update(|p| p.drag_to(position, rect))
    }

    pub fn nudge(&self, key: Key, modifiers: KeyModifiers) -> bool {
        self.update(|p| p.nudge(key, modifiers))
    }

    pub fn input_hex(&self, text: &str) -> bool {
        self.update(|p| p.input_hex(text))
    }

    pub fn select_preset(&self, index: usize) -> EventResult {
        self.update(|p| p.select_preset(index))
    }

    /// Dispatch one raw input event.
    pub fn handle(&self, event: &PickerEvent) -> EventResult {
        self.update(|p| p.handle(event))
    }

    pub fn tick(&self) -> bool {
        self.update(ColorPicker::tick)
    }

    pub fn tick_at(&self, now: Instant) -> bool {
        self.update(|p| p.tick_at(now))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    pub(crate) fn teardown(&self) {
        self.update(ColorPicker::teardown);
    }

    /// Deliver anything queued outside an operation (construction)
    pub(crate) fn flush(&self) {
        self.update(|_| ());
    }

    fn read<R>(&self, f: impl FnOnce(&ColorPicker) -> R) -> R {
        f(&*self.picker.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ColorPicker) -> R) -> R {
        let (result, pending) = {
            let mut picker = self.picker.borrow_mut();
            let result = f(&mut *picker);
            (result, picker.take_notifications())
        };
        for notification in pending {
            log::trace!("PickerHandle: {:?}", notification);
            self.hooks.notify(notification);
        }
        result
    }
}

impl fmt::Debug for PickerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.picker.try_borrow() {
            Ok(picker) => fmt::Debug::fmt(&*picker, f),
            Err(_) => f.write_str("PickerHandle { <busy> }"),
        }
    }
}
