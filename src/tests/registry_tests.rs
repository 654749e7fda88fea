//! Registry scenarios: attach, lookup, replacement and teardown.

use std::cell::RefCell;
use std::rc::Rc;

use super::support::{init_logging, FakeDocument, FakeView, HookLog};
use crate::callback::PickerHooks;
use crate::config::{PickerConfig, PickerOptions};
use crate::error::PickerError;
use crate::event::{Key, KeyModifiers, PickerEvent};
use crate::host::{HostId, HostTarget};
use crate::picker::PickerHandle;
use crate::registry::PickerRegistry;

#[test]
fn test_attach_by_selector() {
    init_logging();
    let mut document = FakeDocument::new();
    let (id, host) = document.add_input("#brand", "#ff0000");
    let (view, _) = FakeView::boxed();

    let mut registry = PickerRegistry::new();
    let handle = registry
        .attach(&document, "#brand", PickerOptions::default(), HookLog::default().hooks(), view)
        .unwrap();

    assert_eq!(handle.host_id(), id);
    assert!(registry.contains(id));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(id).unwrap().get_color(), "#ff0000");
    assert_eq!(host.borrow().value, "#ff0000");
}

#[test]
fn test_attach_by_element() {
    init_logging();
    let mut document = FakeDocument::new();
    let (id, _) = document.add_input("#accent", "");
    let (view, _) = FakeView::boxed();

    let mut registry = PickerRegistry::new();
    let config = PickerConfig::from_json(r#"{ "format": "rgb" }"#).unwrap();
    let handle = registry
        .attach(&document, id, config, HookLog::default().hooks(), view)
        .unwrap();

    assert_eq!(handle.get_color(), "rgb(59, 130, 246)");
}

#[test]
fn test_attach_unknown_host_fails() {
    init_logging();
    let document = FakeDocument::new();
    let (view, view_log) = FakeView::boxed();

    let mut registry = PickerRegistry::new();
    let err = registry
        .attach(&document, "#missing", PickerOptions::default(), HookLog::default().hooks(), view)
        .unwrap_err();

    assert!(matches!(err, PickerError::HostNotFound { ref target } if target == "#missing"));
    assert_eq!(err.to_string(), "Host input not found: #missing");
    assert!(registry.is_empty());
    assert!(view_log.borrow().renders.is_empty());
}

#[test]
fn test_unknown_element_fails() {
    init_logging();
    let document = FakeDocument::new();
    let (view, _) = FakeView::boxed();

    let mut registry = PickerRegistry::new();
    let result = registry.attach(
        &document,
        HostTarget::Element(HostId(42)),
        PickerOptions::default(),
        HookLog::default().hooks(),
        view,
    );
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Host input not found: host#42");
}

#[test]
fn test_destroy_removes_view_once() {
    init_logging();
    let mut document = FakeDocument::new();
    let (id, host) = document.add_input("#color", "#00ff00");
    let (view, view_log) = FakeView::boxed();
    let hooks = HookLog::default();

    let mut registry = PickerRegistry::new();
    let handle = registry
        .attach(&document, "#color", PickerOptions::default(), hooks.hooks(), view)
        .unwrap();
    handle.open();
    let writes = host.borrow().writes.len();

    assert!(registry.destroy(id));
    assert!(!registry.destroy(id));
    assert!(!registry.contains(id));
    assert_eq!(view_log.borrow().removed, 1);

    assert!(handle.is_destroyed());
    // No close notification on teardown, color untouched
    assert_eq!(hooks.close_count(), 0);
    assert_eq!(handle.get_color(), "#00ff00");

    // Further input is ignored
    assert!(handle.handle(&PickerEvent::HostClick).is_none());
    assert!(handle
        .handle(&PickerEvent::SurfaceKey {
            key: Key::ArrowUp,
            modifiers: KeyModifiers::NONE,
        })
        .is_none());
    assert!(!handle.set_color("#0000ff"));
    assert!(!handle.close());
    assert!(!handle.announcement_pending());
    assert_eq!(handle.get_color(), "#00ff00");
    assert_eq!(host.borrow().writes.len(), writes);
    assert!(hooks.changes().is_empty());
}

#[test]
fn test_destroy_cancels_pending_announcement() {
    init_logging();
    let mut document = FakeDocument::new();
    let (id, _) = document.add_input("#color", "#00ff00");
    let (view, view_log) = FakeView::boxed();

    let mut registry = PickerRegistry::new();
    let handle = registry
        .attach(&document, "#color", PickerOptions::default(), HookLog::default().hooks(), view)
        .unwrap();
    handle.set_hue(10.0);
    assert!(handle.announcement_pending());

    registry.destroy(id);
    assert!(!handle.announcement_pending());
    assert!(!handle.tick());
    assert!(view_log.borrow().announcements.is_empty());
}

#[test]
fn test_reattach_replaces_previous_picker() {
    init_logging();
    let mut document = FakeDocument::new();
    let (id, _) = document.add_input("#color", "#ff0000");
    let (first_view, first_log) = FakeView::boxed();
    let (second_view, second_log) = FakeView::boxed();

    let mut registry = PickerRegistry::new();
    let first = registry
        .attach(&document, "#color", PickerOptions::default(), HookLog::default().hooks(), first_view)
        .unwrap();
    let second = registry
        .attach(&document, id, PickerOptions::default(), HookLog::default().hooks(), second_view)
        .unwrap();

    assert_eq!(registry.len(), 1);
    assert!(first.is_destroyed());
    assert!(!second.is_destroyed());
    assert_eq!(first_log.borrow().removed, 1);
    assert_eq!(second_log.borrow().removed, 0);
    assert!(PickerHandle::ptr_eq(&registry.get(id).unwrap(), &second));
}

#[test]
fn test_hosts_and_clear() {
    init_logging();
    let mut document = FakeDocument::new();
    let (a, _) = document.add_input("#a", "");
    let (b, _) = document.add_input("#b", "");
    let (view_a, log_a) = FakeView::boxed();
    let (view_b, log_b) = FakeView::boxed();

    let mut registry = PickerRegistry::new();
    registry
        .attach(&document, "#b", PickerOptions::default(), HookLog::default().hooks(), view_b)
        .unwrap();
    registry
        .attach(&document, "#a", PickerOptions::default(), HookLog::default().hooks(), view_a)
        .unwrap();

    assert_eq!(registry.hosts(), vec![a, b]);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.get(a).is_none());
    assert_eq!(log_a.borrow().removed, 1);
    assert_eq!(log_b.borrow().removed, 1);
}

/// Slot a hook uses to reach its own picker after attach.
type Slot = Rc<RefCell<Option<PickerHandle>>>;

fn slot_color(slot: &Slot) -> String {
    slot.borrow().as_ref().map(PickerHandle::get_color).unwrap_or_default()
}

#[test]
fn test_hooks_can_read_their_own_picker() {
    init_logging();
    let mut document = FakeDocument::new();
    document.add_input("#color", "#ff0000");
    let (view, _) = FakeView::boxed();

    let slot: Slot = Rc::new(RefCell::new(None));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let hooks = {
        let (change_slot, open_slot, close_slot) = (slot.clone(), slot.clone(), slot.clone());
        let (change_seen, open_seen, close_seen) = (seen.clone(), seen.clone(), seen.clone());
        PickerHooks::new()
            .on_change(move |color| {
                let current = slot_color(&change_slot);
                change_seen.borrow_mut().push(format!("change {} {}", color, current));
            })
            .on_open(move || {
                let open = open_slot.borrow().as_ref().is_some_and(PickerHandle::is_open);
                open_seen.borrow_mut().push(format!("open {}", open));
            })
            .on_close(move || {
                let current = slot_color(&close_slot);
                close_seen.borrow_mut().push(format!("close {}", current));
            })
    };

    let mut registry = PickerRegistry::new();
    let handle = registry
        .attach(&document, "#color", PickerOptions::default(), hooks, view)
        .unwrap();
    *slot.borrow_mut() = Some(handle.clone());

    handle.open();
    assert!(handle.set_color("#00ff00"));
    assert!(handle.select_preset(0).closed);

    assert_eq!(
        *seen.borrow(),
        vec![
            "open true",
            "change #00ff00 #00ff00",
            "change #ef4444 #ef4444",
            "close #ef4444",
        ]
    );
    slot.borrow_mut().take();
}

#[test]
fn test_hook_may_drive_its_own_picker() {
    init_logging();
    let mut document = FakeDocument::new();
    document.add_input("#color", "#ff0000");
    let (view, _) = FakeView::boxed();

    let slot: Slot = Rc::new(RefCell::new(None));
    let hooks = {
        let slot = slot.clone();
        PickerHooks::new().on_open(move || {
            if let Some(handle) = slot.borrow().as_ref() {
                handle.set_color("#0000ff");
            }
        })
    };

    let mut registry = PickerRegistry::new();
    let handle = registry
        .attach(&document, "#color", PickerOptions::default(), hooks, view)
        .unwrap();
    *slot.borrow_mut() = Some(handle.clone());

    assert!(handle.open());
    assert_eq!(handle.get_color(), "#0000ff");
    slot.borrow_mut().take();
}

#[test]
fn test_inline_on_open_runs_after_registration() {
    init_logging();
    let mut document = FakeDocument::new();
    document.add_input("#color", "");
    let (view, _) = FakeView::boxed();
    let hooks = HookLog::default();

    let mut registry = PickerRegistry::new();
    let config = PickerConfig::from_json(r#"{ "inline": true }"#).unwrap();
    let handle = registry
        .attach(&document, "#color", config, hooks.hooks(), view)
        .unwrap();

    assert!(handle.is_open());
    assert_eq!(hooks.open_count(), 1);
    assert!(hooks.changes().is_empty());
}
