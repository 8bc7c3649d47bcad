//! Hover highlighting of live widgets from mirror tree rows.
//!
//! At most one live widget carries the marker class at any time. Moving the
//! marker from one widget to another happens inside a single
//! [`Dom::batch`] so the terminal sees one repaint.

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

/// The row last hovered and the widget it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hovered {
    pub line: usize,
    pub widget: NodeId,
}

#[derive(Debug, Clone)]
pub struct HoverState {
    marker: String,
    current: Option<Hovered>,
}

impl HoverState {
    pub fn new(marker: impl Into<String>) -> Self {
        Self { marker: marker.into(), current: None }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn current(&self) -> Option<Hovered> {
        self.current
    }

    pub fn line(&self) -> Option<usize> {
        self.current.map(|hovered| hovered.line)
    }

    /// The pointer is over `line`, which resolves to `widget` (if any).
    ///
    /// Returns `true` when the marker moved. Rows with no live widget and the
    /// already-highlighted widget leave everything as it is.
    pub fn hover(&mut self, dom: &mut Dom, line: usize, widget: Option<NodeId>) -> bool {
        let Some(widget) = widget.filter(|&w| dom.contains(w)) else {
            return false;
        };
        if self.current.is_some_and(|hovered| hovered.widget == widget) {
            return false;
        }
        let previous = self.current.map(|hovered| hovered.widget);
        let marker = self.marker.as_str();
        dom.batch(|dom| {
            if let Some(previous) = previous {
                dom.remove_class(previous, marker);
            }
            dom.add_class(widget, marker);
        });
        tracing::trace!(line, "hover highlight moved");
        self.current = Some(Hovered { line, widget });
        true
    }

    /// The pointer left the tree viewport.
    pub fn leave(&mut self, dom: &mut Dom) {
        if let Some(hovered) = self.current.take() {
            dom.remove_class(hovered.widget, &self.marker);
            tracing::trace!(line = hovered.line, "hover highlight cleared");
        }
    }
}
