//! The host text input a picker is bound to.

use std::fmt;

/// Opaque key identifying one host input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(pub u64);

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host#{}", self.0)
    }
}

/// How the host input is referenced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostTarget {
    /// A selector to look up
    Selector(String),
    /// An element already in hand
    Element(HostId),
}

impl fmt::Display for HostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostTarget::Selector(selector) => write!(f, "{}", selector),
            HostTarget::Element(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for HostTarget {
    fn from(selector: &str) -> Self {
        HostTarget::Selector(selector.to_string())
    }
}

impl From<HostId> for HostTarget {
    fn from(id: HostId) -> Self {
        HostTarget::Element(id)
    }
}

/// Access to the host text input.
pub trait HostInput {
    /// Current text of the input
    fn value(&self) -> String;

    /// Replace the text of the input
    fn set_value(&mut self, value: &str);

    /// Move keyboard focus to the input
    fn focus(&mut self);
}

/// Resolves a [`HostTarget`] to a live host input.
pub trait HostResolver {
    /// Look up the target. `None` when it names no element.
    fn resolve(&self, target: &HostTarget) -> Option<(HostId, Box<dyn HostInput>)>;
}
