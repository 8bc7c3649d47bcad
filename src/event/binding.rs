//! Key bindings available regardless of focus.
//!
//! [`KeyBindingRegistry`] maps key + modifier combinations to a
//! [`BindingAction`]. Bindings are checked before any focused widget sees the
//! key.

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

/// Action to take when a key binding is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingAction {
    /// Show the inspector when hidden, hide it when shown.
    ToggleInspector,
    /// Request application shutdown.
    Quit,
}

/// Registry of key bindings, mapping (Key, Modifiers) -> BindingAction.
#[derive(Debug, Default)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), BindingAction>,
}

impl KeyBindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `toggle_key` bound to [`BindingAction::ToggleInspector`]
    /// and `Ctrl+C` bound to [`BindingAction::Quit`].
    pub fn with_defaults(toggle_key: Key) -> Self {
        let mut registry = Self::new();
        registry.bind(toggle_key, Modifiers::NONE, BindingAction::ToggleInspector);
        registry.bind(Key::Char('c'), Modifiers::CTRL, BindingAction::Quit);
        registry
    }

    /// Register a binding, replacing any existing one for the same keys.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: BindingAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a binding, returning its action.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<BindingAction> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Exact-match lookup of key and modifiers.
    pub fn resolve(&self, event: &KeyEvent) -> Option<BindingAction> {
        self.bindings.get(&(event.code, event.modifiers)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
