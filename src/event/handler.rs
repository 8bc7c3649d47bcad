//! Event queue and pointer capture.
//!
//! [`EventQueue`] holds [`InspectorEvent`]s in arrival order. [`PointerCapture`]
//! is the exclusivity slot a resize bar claims while it is being dragged.

use std::collections::VecDeque;

use super::message::InspectorEvent;
use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// EventQueue
// ---------------------------------------------------------------------------

/// FIFO of pending inspector events.
///
/// The queue does not route anything itself; the application loop drains it
/// and hands each event to the inspector's router.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<InspectorEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event.
    pub fn push(&mut self, event: InspectorEvent) {
        self.queue.push_back(event);
    }

    /// Enqueue several events, keeping their order.
    pub fn extend(&mut self, events: impl IntoIterator<Item = InspectorEvent>) {
        self.queue.extend(events);
    }

    /// Take the oldest pending event.
    pub fn pop(&mut self) -> Option<InspectorEvent> {
        self.queue.pop_front()
    }

    /// Number of pending events.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PointerCapture
// ---------------------------------------------------------------------------

/// The node that currently receives all pointer input, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerCapture {
    owner: Option<NodeId>,
}

impl PointerCapture {
    /// Route all pointer input to `node` until released.
    ///
    /// A second capture replaces the first.
    pub fn capture(&mut self, node: NodeId) {
        if let Some(previous) = self.owner.replace(node) {
            if previous != node {
                tracing::warn!(?previous, ?node, "pointer capture taken over");
            }
        }
    }

    /// Release the capture if `node` holds it. Returns whether it did.
    pub fn release(&mut self, node: NodeId) -> bool {
        if self.owner == Some(node) {
            self.owner = None;
            true
        } else {
            false
        }
    }

    /// Whether `node` holds the capture.
    pub fn is_held_by(&self, node: NodeId) -> bool {
        self.owner == Some(node)
    }

    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::message::{Field, InspectorEvent};
    use slotmap::SlotMap;

    fn two_ids() -> (NodeId, NodeId) {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        (sm.insert(()), sm.insert(()))
    }

    // ── EventQueue ───────────────────────────────────────────────────

    #[test]
    fn new_queue_is_empty() {
        let queue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn pop_preserves_arrival_order() {
        let mut queue = EventQueue::new();
        queue.push(InspectorEvent::Shown);
        queue.extend([
            InspectorEvent::NodeHighlighted { line: 1 },
            InspectorEvent::FieldChanged { field: Field::Classes, value: "a".into() },
        ]);
        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.pop(), Some(InspectorEvent::Shown));
        assert_eq!(queue.pop(), Some(InspectorEvent::NodeHighlighted { line: 1 }));
        assert!(matches!(queue.pop(), Some(InspectorEvent::FieldChanged { .. })));
        assert_eq!(queue.pop(), None);
    }

    // ── PointerCapture ───────────────────────────────────────────────

    #[test]
    fn capture_and_release() {
        let (a, _) = two_ids();
        let mut capture = PointerCapture::default();
        capture.capture(a);
        assert!(capture.is_held_by(a));
        assert_eq!(capture.owner(), Some(a));
        assert!(capture.release(a));
        assert_eq!(capture.owner(), None);
    }

    #[test]
    fn release_by_non_owner_is_ignored() {
        let (a, b) = two_ids();
        let mut capture = PointerCapture::default();
        capture.capture(a);
        assert!(!capture.release(b));
        assert!(capture.is_held_by(a));
    }

    #[test]
    fn release_without_capture_is_noop() {
        let (a, _) = two_ids();
        let mut capture = PointerCapture::default();
        assert!(!capture.release(a));
    }

    #[test]
    fn second_capture_replaces_first() {
        let (a, b) = two_ids();
        let mut capture = PointerCapture::default();
        capture.capture(a);
        capture.capture(b);
        assert!(capture.is_held_by(b));
        assert!(!capture.is_held_by(a));
    }
}
