//! In-memory host, view, and hook doubles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::callback::PickerHooks;
use crate::config::{PickerConfig, PickerOptions};
use crate::host::{HostId, HostInput, HostResolver, HostTarget};
use crate::picker::{ColorPicker, PickerHandle};
use crate::view::{PickerView, Placement, ViewUpdate};

/// Install the test logger once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Observable state of a host input.
#[derive(Debug, Default)]
pub struct HostLog {
    pub value: String,
    pub writes: Vec<String>,
    pub focus_count: usize,
}

pub struct FakeHost(Rc<RefCell<HostLog>>);

impl HostInput for FakeHost {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        let mut log = self.0.borrow_mut();
        log.value = value.to_string();
        log.writes.push(value.to_string());
    }

    fn focus(&mut self) {
        self.0.borrow_mut().focus_count += 1;
    }
}

/// A page with a fixed set of host inputs, addressable by selector or id.
#[derive(Default)]
pub struct FakeDocument {
    by_selector: HashMap<String, HostId>,
    hosts: HashMap<HostId, Rc<RefCell<HostLog>>>,
    next_id: u64,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input with the given selector and initial text.
    pub fn add_input(&mut self, selector: &str, value: &str) -> (HostId, Rc<RefCell<HostLog>>) {
        self.next_id += 1;
        let id = HostId(self.next_id);
        let log = Rc::new(RefCell::new(HostLog {
            value: value.to_string(),
            ..Default::default()
        }));
        self.by_selector.insert(selector.to_string(), id);
        self.hosts.insert(id, log.clone());
        (id, log)
    }
}

impl HostResolver for FakeDocument {
    fn resolve(&self, target: &HostTarget) -> Option<(HostId, Box<dyn HostInput>)> {
        let id = match target {
            HostTarget::Selector(selector) => *self.by_selector.get(selector)?,
            HostTarget::Element(id) => *id,
        };
        let log = self.hosts.get(&id)?;
        Some((id, Box::new(FakeHost(log.clone()))))
    }
}

/// Everything the picker pushed to its view.
#[derive(Debug, Default)]
pub struct ViewLog {
    pub renders: Vec<ViewUpdate>,
    pub shown: Vec<Placement>,
    pub hidden: usize,
    pub focused: usize,
    pub announcements: Vec<String>,
    pub removed: usize,
}

impl ViewLog {
    pub fn last(&self) -> &ViewUpdate {
        self.renders.last().expect("at least one render")
    }
}

pub struct FakeView(Rc<RefCell<ViewLog>>);

impl FakeView {
    pub fn boxed() -> (Box<dyn PickerView>, Rc<RefCell<ViewLog>>) {
        let log = Rc::new(RefCell::new(ViewLog::default()));
        (Box::new(FakeView(log.clone())), log)
    }
}

impl PickerView for FakeView {
    fn render(&mut self, update: &ViewUpdate) {
        self.0.borrow_mut().renders.push(update.clone());
    }

    fn show(&mut self, placement: Placement) {
        self.0.borrow_mut().shown.push(placement);
    }

    fn hide(&mut self) {
        self.0.borrow_mut().hidden += 1;
    }

    fn focus_surface(&mut self) {
        self.0.borrow_mut().focused += 1;
    }

    fn announce(&mut self, message: &str) {
        self.0.borrow_mut().announcements.push(message.to_string());
    }

    fn remove(&mut self) {
        self.0.borrow_mut().removed += 1;
    }
}

/// Records hook invocations.
#[derive(Debug, Default, Clone)]
pub struct HookLog {
    pub changes: Rc<RefCell<Vec<String>>>,
    pub opens: Rc<RefCell<usize>>,
    pub closes: Rc<RefCell<usize>>,
}

impl HookLog {
    pub fn hooks(&self) -> PickerHooks {
        let changes = self.changes.clone();
        let opens = self.opens.clone();
        let closes = self.closes.clone();
        PickerHooks::new()
            .on_change(move |color| changes.borrow_mut().push(color))
            .on_open(move || *opens.borrow_mut() += 1)
            .on_close(move || *closes.borrow_mut() += 1)
    }

    pub fn changes(&self) -> Vec<String> {
        self.changes.borrow().clone()
    }

    pub fn open_count(&self) -> usize {
        *self.opens.borrow()
    }

    pub fn close_count(&self) -> usize {
        *self.closes.borrow()
    }
}

/// A picker together with handles to everything it talks to.
pub struct Fixture {
    pub picker: PickerHandle,
    pub host: Rc<RefCell<HostLog>>,
    pub view: Rc<RefCell<ViewLog>>,
    pub hooks: HookLog,
}

impl Fixture {
    /// Picker on an input holding `value`, configured from JSON.
    pub fn with_json(value: &str, json: &str) -> Self {
        let config = PickerConfig::from_json(json).expect("valid config");
        Self::new(value, PickerOptions::resolve(config))
    }

    /// Picker on an input holding `value`.
    pub fn new(value: &str, options: PickerOptions) -> Self {
        init_logging();
        let mut document = FakeDocument::new();
        let (_, host) = document.add_input("#color", value);
        let (view, view_log) = FakeView::boxed();
        let hooks = HookLog::default();
        let picker = ColorPicker::new(&document, &HostTarget::from("#color"), options, view)
            .expect("host resolves");
        let picker = PickerHandle::new(picker, hooks.hooks());
        picker.flush();
        Self {
            picker,
            host,
            view: view_log,
            hooks,
        }
    }

    pub fn host_value(&self) -> String {
        self.host.borrow().value.clone()
    }

    pub fn render_count(&self) -> usize {
        self.view.borrow().renders.len()
    }
}
