//! The picker controller.
//!
//! A [`ColorPicker`] owns the canonical color and the open/closed state of
//! one picker instance. Every color-changing operation follows the same
//! sequence:
//! 1. replace the canonical color
//! 2. push a single [`ViewUpdate`] to the view
//! 3. write the formatted color to the host input and queue `on_change`
//!    (skipped while the user is typing in the hex field)
//!
//! Hooks are never called from inside the picker. Each operation queues a
//! [`Notification`], and [`PickerHandle`] delivers the queue once it has
//! released the picker, so a hook may read or drive the picker it belongs to.

mod handle;
mod state;

pub use handle::PickerHandle;
pub use state::{PickerDragging, PickerState, Visibility};

use pickit_color::{is_strict_hex, normalize_hue, ColorModel, Hsl};
use web_time::Instant;

use crate::announce::{announcement_text, Announcer};
use crate::callback::Notification;
use crate::config::PickerOptions;
use crate::constants::{ALPHA_SLIDER_MAX, KEY_STEP, KEY_STEP_LARGE};
use crate::error::PickerError;
use crate::event::{EventResult, Key, KeyModifiers, PickerEvent, Point, SurfaceRect};
use crate::host::{HostId, HostInput, HostResolver, HostTarget};
use crate::view::{PickerView, Placement, ViewUpdate};

/// Which outputs a refresh pass writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refresh {
    /// Construction: everything, but no change notification
    Initial,
    /// Committed change: everything plus `on_change`
    Full,
    /// Live hex typing: leave the hex field and host value alone
    KeepText,
}

/// One picker bound to one host input.
pub struct ColorPicker {
    host_id: HostId,
    host: Box<dyn HostInput>,
    view: Box<dyn PickerView>,
    options: PickerOptions,
    model: ColorModel,
    state: PickerState,
    announcer: Announcer,
    destroyed: bool,
    /// Hook invocations not yet delivered
    outbox: Vec<Notification>,
}

impl ColorPicker {
    /// Bind a new picker to the host input named by `target`.
    ///
    /// The initial color comes from the host input's text, or from
    /// `options.default_color` when the input is empty. Inline pickers open
    /// immediately.
    ///
    /// # Errors
    ///
    /// [`PickerError::HostNotFound`] when `target` does not resolve.
    pub(crate) fn new(
        resolver: &dyn HostResolver,
        target: &HostTarget,
        options: PickerOptions,
        view: Box<dyn PickerView>,
    ) -> Result<Self, PickerError> {
        let (host_id, host) = resolver
            .resolve(target)
            .ok_or_else(|| PickerError::host_not_found(target))?;

        let initial = host.value();
        let initial = if initial.is_empty() {
            options.default_color.clone()
        } else {
            initial
        };

        let mut model = ColorModel::new(Hsl::default(), options.format, options.show_alpha);
        model.set_color(model.parse(&initial));

        let mut picker = Self {
            host_id,
            host,
            view,
            options,
            model,
            state: PickerState::default(),
            announcer: Announcer::new(),
            destroyed: false,
            outbox: Vec::new(),
        };
        log::debug!(
            "ColorPicker: attached to {} with color {:?}",
            picker.host_id,
            picker.model.color()
        );

        picker.refresh(Refresh::Initial);
        if picker.options.inline {
            picker.open();
        }
        Ok(picker)
    }

    /// Key of the bound host input
    pub fn host_id(&self) -> HostId {
        self.host_id
    }

    /// Resolved options (fixed at construction)
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// The canonical color
    pub fn color(&self) -> Hsl {
        self.model.color()
    }

    /// Interaction state
    pub fn state(&self) -> PickerState {
        self.state
    }

    /// Check if the picker is open
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Check if the picker has been torn down
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Closed -> Open. No-op when already open or torn down.
    ///
    /// Returns true when the picker opened.
    pub fn open(&mut self) -> bool {
        if self.destroyed || self.state.is_open() {
            return false;
        }
        self.state.visibility = Visibility::Open;

        let placement = if self.options.inline {
            Placement::Inline
        } else {
            Placement::Popup(self.options.position)
        };
        self.view.show(placement);
        log::debug!("ColorPicker: opened {}", self.host_id);

        self.outbox.push(Notification::Open);
        self.view.focus_surface();
        true
    }

    /// Open -> Closed. No-op when already closed, inline, or torn down.
    ///
    /// Returns true when the picker closed.
    pub fn close(&mut self) -> bool {
        if self.destroyed || self.options.inline || !self.state.is_open() {
            return false;
        }
        self.state.visibility = Visibility::Closed;
        self.state.stop_drag();
        self.view.hide();
        log::debug!("ColorPicker: closed {}", self.host_id);

        self.outbox.push(Notification::Close);
        true
    }

    /// Open when closed, close when open
    pub fn toggle(&mut self) -> EventResult {
        if self.state.is_open() {
            EventResult::close(self.close())
        } else {
            EventResult::open(self.open())
        }
    }

    // =========================================================================
    // Color
    // =========================================================================

    /// The canonical color in the configured output format
    pub fn get_color(&self) -> String {
        self.model.formatted()
    }

    /// Parse `text` and apply it. Unparseable text leaves the color as it
    /// is and notifies nobody.
    ///
    /// Returns true when the color was replaced.
    pub fn set_color(&mut self, text: &str) -> bool {
        if self.destroyed || !self.model.apply(text) {
            return false;
        }
        self.refresh(Refresh::Full);
        true
    }

    /// Re-read the host input after it fired `change`
    pub fn host_changed(&mut self) -> bool {
        let text = self.host.value();
        self.set_color(&text)
    }

    /// Hue slider moved. The value is truncated and clamped to 0-360, with
    /// 360 stored as 0.
    pub fn set_hue(&mut self, value: f64) -> bool {
        if self.destroyed || !value.is_finite() {
            return false;
        }
        let mut color = self.model.color();
        color.h = normalize_hue(value.trunc());
        self.commit(color);
        self.schedule_announcement();
        true
    }

    /// Alpha slider moved. The value is truncated, clamped to 0-100 and
    /// scaled to 0.0-1.0. Ignored when alpha is not shown.
    pub fn set_alpha(&mut self, value: f64) -> bool {
        if self.destroyed || !value.is_finite() {
            return false;
        }
        if !self.options.show_alpha {
            log::debug!("ColorPicker: alpha input ignored, alpha is hidden");
            return false;
        }
        let mut color = self.model.color();
        color.a = value.trunc().clamp(0.0, ALPHA_SLIDER_MAX) / ALPHA_SLIDER_MAX;
        self.commit(color);
        self.schedule_announcement();
        true
    }

    /// Move the saturation/lightness pointer to `position`.
    ///
    /// The position is clamped to `rect`; the horizontal fraction becomes
    /// saturation and the inverted vertical fraction becomes lightness.
    pub fn drag_to(&mut self, position: Point, rect: SurfaceRect) -> bool {
        if self.destroyed {
            return false;
        }
        let Some((fx, fy)) = rect.fraction(position) else {
            log::debug!("ColorPicker: ignoring pointer on empty surface {:?}", rect);
            return false;
        };
        let mut color = self.model.color();
        color.s = fx * 100.0;
        color.l = 100.0 - fy * 100.0;
        self.commit(color);
        self.schedule_announcement();
        true
    }

    /// Arrow-key navigation on the saturation surface.
    ///
    /// Left/Right change saturation, Up/Down change lightness, by 1 or by 10
    /// with Shift held, clamped to 0-100. Other keys are ignored.
    pub fn nudge(&mut self, key: Key, modifiers: KeyModifiers) -> bool {
        if self.destroyed {
            return false;
        }
        let step = if modifiers.shift { KEY_STEP_LARGE } else { KEY_STEP };
        let mut color = self.model.color();
        match key {
            Key::ArrowRight => color.s = (color.s + step).min(100.0),
            Key::ArrowLeft => color.s = (color.s - step).max(0.0),
            Key::ArrowUp => color.l = (color.l + step).min(100.0),
            Key::ArrowDown => color.l = (color.l - step).max(0.0),
            _ => return false,
        }
        self.commit(color);
        self.schedule_announcement();
        true
    }

    /// Text typed into the hex field.
    ///
    /// Only complete `#RRGGBB` / `#RRGGBBAA` input is applied, and the hex
    /// field, host value, and `on_change` are left alone so the user's
    /// typing is not overwritten.
    pub fn input_hex(&mut self, text: &str) -> bool {
        if self.destroyed || !is_strict_hex(text) || !self.model.apply(text) {
            return false;
        }
        self.refresh(Refresh::KeepText);
        true
    }

    /// Preset swatch `index` chosen. Closes afterwards when
    /// `close_on_select` is set.
    pub fn select_preset(&mut self, index: usize) -> EventResult {
        if self.destroyed {
            return EventResult::NONE;
        }
        let Some(preset) = self.options.preset_colors.get(index).cloned() else {
            log::debug!("ColorPicker: no preset at index {}", index);
            return EventResult::NONE;
        };

        let changed = self.set_color(&preset);
        let closed = self.options.close_on_select && self.close();
        EventResult::color(changed).and(EventResult::close(closed))
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch one raw input event.
    pub fn handle(&mut self, event: &PickerEvent) -> EventResult {
        if self.destroyed {
            return EventResult::NONE;
        }
        log::trace!("ColorPicker: {:?}", event);

        match event {
            PickerEvent::HostClick => {
                if self.options.inline {
                    EventResult::NONE
                } else {
                    self.toggle()
                }
            }

            PickerEvent::HostChange => EventResult::color(self.host_changed()),

            PickerEvent::HueInput(value) => EventResult::color(self.set_hue(*value)),

            PickerEvent::AlphaInput(value) => EventResult::color(self.set_alpha(*value)),

            PickerEvent::SurfacePointerDown { position, rect } => {
                self.state.start_drag(PickerDragging::Surface);
                EventResult::color(self.drag_to(*position, *rect))
            }

            PickerEvent::SurfacePointerMove { position, rect } => {
                if self.state.is_dragging() {
                    EventResult::color(self.drag_to(*position, *rect))
                } else {
                    EventResult::NONE
                }
            }

            PickerEvent::SurfacePointerUp => {
                self.state.stop_drag();
                EventResult::NONE
            }

            PickerEvent::SurfaceKey { key, modifiers } => {
                EventResult::color(self.nudge(*key, *modifiers))
            }

            PickerEvent::HexInput(text) => EventResult::color(self.input_hex(text)),

            PickerEvent::PresetClick(index) => self.select_preset(*index),

            PickerEvent::DocumentPointerDown {
                inside_picker,
                on_host,
            } => {
                if *inside_picker || *on_host {
                    EventResult::NONE
                } else {
                    EventResult::close(self.close())
                }
            }

            PickerEvent::DocumentKey { key: Key::Escape } => {
                let closed = self.close();
                if closed {
                    self.host.focus();
                }
                EventResult::close(closed)
            }

            PickerEvent::DocumentKey { .. } => EventResult::NONE,
        }
    }

    // =========================================================================
    // Announcements
    // =========================================================================

    /// Check if an announcement is waiting to fire
    pub fn announcement_pending(&self) -> bool {
        self.announcer.is_pending()
    }

    /// Fire a due announcement. Call from the host's timer.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Fire a due announcement as of `now`.
    ///
    /// The text describes the color held at fire time.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.destroyed || !self.announcer.poll(now) {
            return false;
        }
        let message = announcement_text(&self.model.formatted());
        self.view.announce(&message);
        true
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Hook invocations queued since the last call, oldest first
    pub(crate) fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    /// Remove the view and stop reacting to input. Safe to call repeatedly;
    /// the color is left as it is and no hooks fire.
    pub(crate) fn teardown(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.outbox.clear();
        self.announcer.cancel();
        self.state.stop_drag();
        self.view.remove();
        log::debug!("ColorPicker: destroyed {}", self.host_id);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn schedule_announcement(&mut self) {
        self.announcer.schedule(Instant::now());
    }

    /// Replace the color and run a full refresh
    fn commit(&mut self, color: Hsl) {
        self.model.set_color(color);
        self.refresh(Refresh::Full);
    }

    /// Push the canonical color to every dependent output
    fn refresh(&mut self, scope: Refresh) {
        let color = self.model.color();
        let include_text = scope != Refresh::KeepText;
        let update = ViewUpdate::from_color(color, self.model.show_alpha(), include_text);
        log::trace!("ColorPicker: refresh {:?} -> {:?}", scope, update);
        self.view.render(&update);

        if include_text {
            let formatted = self.model.formatted();
            self.host.set_value(&formatted);
            if scope == Refresh::Full {
                self.outbox.push(Notification::Change(formatted));
            }
        }
    }
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("host_id", &self.host_id)
            .field("color", &self.model.color())
            .field("state", &self.state)
            .field("options", &self.options)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
