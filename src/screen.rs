//! Screen: the host runtime state the inspector works against.
//!
//! [`Screen`] owns the live widget [`Dom`], the global [`StyleRegistry`], the
//! pointer capture slot, the focus chain, and the compositor. [`FocusChain`]
//! keeps the tab order of focusable nodes inside one subtree.

use crate::css::registry::StyleRegistry;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::handler::PointerCapture;
use crate::geometry::Size;
use crate::render::compositor::Compositor;

// ---------------------------------------------------------------------------
// FocusChain
// ---------------------------------------------------------------------------

/// Ordered list of focusable nodes for tab navigation.
///
/// Rebuilt from a DOM subtree whenever that subtree changes. Focus cycles in
/// depth-first order and wraps at both ends.
#[derive(Debug, Default)]
pub struct FocusChain {
    nodes: Vec<NodeId>,
    current: Option<usize>,
}

impl FocusChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the focusable nodes under `scope` (inclusive).
    ///
    /// Focus survives the rebuild when the focused node is still in the chain.
    pub fn rebuild(&mut self, dom: &Dom, scope: NodeId) {
        let old_focused = self.current_node();
        self.nodes = dom
            .walk_depth_first(scope)
            .into_iter()
            .filter(|&id| dom.get(id).is_some_and(|data| data.focusable))
            .collect();
        self.current = old_focused.and_then(|old| self.nodes.iter().position(|&n| n == old));
    }

    /// The focused node, if any.
    pub fn current_node(&self) -> Option<NodeId> {
        self.current.and_then(|idx| self.nodes.get(idx).copied())
    }

    /// Focus the next node, wrapping. `None` for an empty chain.
    pub fn focus_next(&mut self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }
        let next = self.current.map_or(0, |idx| (idx + 1) % self.nodes.len());
        self.current = Some(next);
        self.nodes.get(next).copied()
    }

    /// Focus the previous node, wrapping. `None` for an empty chain.
    pub fn focus_previous(&mut self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }
        let prev = match self.current {
            Some(0) | None => self.nodes.len() - 1,
            Some(idx) => idx - 1,
        };
        self.current = Some(prev);
        self.nodes.get(prev).copied()
    }

    /// Focus `id`. Returns `false` if it is not in the chain.
    pub fn focus_node(&mut self, id: NodeId) -> bool {
        match self.nodes.iter().position(|&n| n == id) {
            Some(pos) => {
                self.current = Some(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A single screen of the application.
pub struct Screen {
    /// The live widget tree.
    pub dom: Dom,
    /// Application-wide style rules.
    pub styles: StyleRegistry,
    /// Exclusive pointer routing.
    pub capture: PointerCapture,
    pub focus: FocusChain,
    pub compositor: Compositor,
}

impl Screen {
    /// A screen of the given size with an empty DOM.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            dom: Dom::new(),
            styles: StyleRegistry::new(),
            capture: PointerCapture::default(),
            focus: FocusChain::new(),
            compositor: Compositor::new(width, height),
        }
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "screen resized");
        self.compositor.resize(width, height);
    }

    /// Viewport size in cells.
    pub fn size(&self) -> Size {
        Size::new(i32::from(self.compositor.width), i32::from(self.compositor.height))
    }

    /// The focused node, if any.
    pub fn focused_node(&self) -> Option<NodeId> {
        self.focus.current_node()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;

    /// Root > [Panel > [Input(f), Label, Input(f)], Button(f)]
    fn build_dom() -> (Dom, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Screen"));
        let panel = dom.insert_child(root, NodeData::new("Panel"));
        let a = dom.insert_child(panel, NodeData::new("Input").focusable(true));
        dom.insert_child(panel, NodeData::new("Label"));
        let b = dom.insert_child(panel, NodeData::new("Input").focusable(true));
        let outside = dom.insert_child(root, NodeData::new("Button").focusable(true));
        (dom, panel, a, b, outside)
    }

    // ── FocusChain ───────────────────────────────────────────────────

    #[test]
    fn rebuild_is_scoped() {
        let (dom, panel, ..) = build_dom();
        let mut chain = FocusChain::new();
        chain.rebuild(&dom, panel);
        assert_eq!(chain.len(), 2);

        chain.rebuild(&dom, dom.root().unwrap());
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn focus_next_and_previous_wrap() {
        let (dom, panel, a, b, _) = build_dom();
        let mut chain = FocusChain::new();
        chain.rebuild(&dom, panel);
        assert_eq!(chain.current_node(), None);
        assert_eq!(chain.focus_next(), Some(a));
        assert_eq!(chain.focus_next(), Some(b));
        assert_eq!(chain.focus_next(), Some(a));
        assert_eq!(chain.focus_previous(), Some(b));

        chain.clear();
        assert_eq!(chain.focus_previous(), Some(b));
    }

    #[test]
    fn empty_chain() {
        let mut chain = FocusChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.focus_next(), None);
        assert_eq!(chain.focus_previous(), None);
    }

    #[test]
    fn focus_node_outside_scope_fails() {
        let (dom, panel, _a, b, outside) = build_dom();
        let mut chain = FocusChain::new();
        chain.rebuild(&dom, panel);
        assert!(chain.focus_node(b));
        assert!(!chain.focus_node(outside));
        assert_eq!(chain.current_node(), Some(b));
    }

    #[test]
    fn rebuild_preserves_or_drops_focus() {
        let (mut dom, panel, a, b, _) = build_dom();
        let mut chain = FocusChain::new();
        chain.rebuild(&dom, panel);
        chain.focus_node(b);
        chain.rebuild(&dom, panel);
        assert_eq!(chain.current_node(), Some(b));

        dom.remove(b);
        chain.rebuild(&dom, panel);
        assert_eq!(chain.current_node(), None);
        assert_eq!(chain.focus_next(), Some(a));
    }

    // ── Screen ───────────────────────────────────────────────────────

    #[test]
    fn new_screen() {
        let screen = Screen::new(80, 24);
        assert_eq!(screen.size(), Size::new(80, 24));
        assert!(screen.dom.is_empty());
        assert!(screen.styles.is_empty());
        assert_eq!(screen.capture.owner(), None);
        assert_eq!(screen.focused_node(), None);
    }

    #[test]
    fn resize_updates_size() {
        let mut screen = Screen::new(80, 24);
        screen.resize(120, 40);
        assert_eq!(screen.size(), Size::new(120, 40));
        assert_eq!(screen.compositor.width, 120);
    }
}
