//! Global listener table
//!
//! Tracks which document-wide listeners are installed. The key-down listener
//! lives for the whole browser lifetime; pointer-move and pointer-up are only
//! installed while the sidebar is being resized.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Listener {
    KeyDown,
    PointerMove,
    PointerUp,
}

#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    installed: BTreeSet<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the listener was already installed
    pub fn subscribe(&mut self, listener: Listener) -> bool {
        let added = self.installed.insert(listener);
        if added {
            tracing::trace!(?listener, "Listener installed");
        }
        added
    }

    /// Returns false if the listener was not installed
    pub fn unsubscribe(&mut self, listener: Listener) -> bool {
        let removed = self.installed.remove(&listener);
        if removed {
            tracing::trace!(?listener, "Listener removed");
        }
        removed
    }

    pub fn is_subscribed(&self, listener: Listener) -> bool {
        self.installed.contains(&listener)
    }

    pub fn installed(&self) -> Vec<Listener> {
        self.installed.iter().copied().collect()
    }

    /// Drop every listener (component teardown)
    pub fn clear(&mut self) {
        self.installed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_unsubscribe() {
        let mut registry = ListenerRegistry::new();

        assert!(registry.subscribe(Listener::PointerMove));
        assert!(!registry.subscribe(Listener::PointerMove));
        assert!(registry.is_subscribed(Listener::PointerMove));

        assert!(registry.unsubscribe(Listener::PointerMove));
        assert!(!registry.unsubscribe(Listener::PointerMove));
        assert!(registry.installed().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut registry = ListenerRegistry::new();
        registry.subscribe(Listener::KeyDown);
        registry.subscribe(Listener::PointerUp);
        assert_eq!(
            registry.installed(),
            vec![Listener::KeyDown, Listener::PointerUp]
        );

        registry.clear();
        assert!(!registry.is_subscribed(Listener::KeyDown));
    }
}
