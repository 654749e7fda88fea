//! Registry of live pickers, keyed by host input.
//!
//! The registry is an explicit value owned by the embedding application.
//! Pickers are added when attached and removed when destroyed; the map is
//! the only way to find an existing picker from its host input.

use std::collections::HashMap;

use crate::callback::PickerHooks;
use crate::config::PickerOptions;
use crate::error::PickerError;
use crate::host::{HostId, HostResolver, HostTarget};
use crate::picker::{ColorPicker, PickerHandle};
use crate::view::PickerView;

/// Host input -> picker map.
#[derive(Debug, Default)]
pub struct PickerRegistry {
    pickers: HashMap<HostId, PickerHandle>,
}

impl PickerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a picker for `target` and register it.
    ///
    /// A picker already bound to the same host is torn down and replaced.
    /// Hooks queued during construction (`on_open` for inline pickers) run
    /// once the picker is registered.
    pub fn attach(
        &mut self,
        resolver: &dyn HostResolver,
        target: impl Into<HostTarget>,
        options: impl Into<PickerOptions>,
        hooks: PickerHooks,
        view: Box<dyn PickerView>,
    ) -> Result<PickerHandle, PickerError> {
        let target = target.into();
        let picker = ColorPicker::new(resolver, &target, options.into(), view)?;
        let host_id = picker.host_id();
        let handle = PickerHandle::new(picker, hooks);

        if let Some(previous) = self.pickers.insert(host_id, handle.clone()) {
            log::warn!("PickerRegistry: replacing existing picker on {}", host_id);
            previous.teardown();
        }
        handle.flush();
        Ok(handle)
    }

    /// Look up the picker bound to `host`.
    pub fn get(&self, host: HostId) -> Option<PickerHandle> {
        self.pickers.get(&host).cloned()
    }

    /// Check if a picker is bound to `host`.
    pub fn contains(&self, host: HostId) -> bool {
        self.pickers.contains_key(&host)
    }

    /// Tear down and unregister the picker bound to `host`.
    ///
    /// Returns false when no picker was registered; repeated calls are
    /// harmless.
    pub fn destroy(&mut self, host: HostId) -> bool {
        match self.pickers.remove(&host) {
            Some(handle) => {
                handle.teardown();
                true
            }
            None => false,
        }
    }

    /// Tear down every registered picker.
    pub fn clear(&mut self) {
        for (_, handle) in self.pickers.drain() {
            handle.teardown();
        }
    }

    /// All hosts with a registered picker, in ascending order.
    pub fn hosts(&self) -> Vec<HostId> {
        let mut hosts: Vec<HostId> = self.pickers.keys().copied().collect();
        hosts.sort();
        hosts
    }

    /// Number of registered pickers.
    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    /// Check if no pickers are registered.
    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }
}
