//! DOM queries by id, class and widget type.
//!
//! All queries iterate the arena, so they also see detached nodes inserted with
//! [`Dom::insert`]. Results are in arena order, which is deterministic but not
//! tree order.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// First node whose identifier equals `id`.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// All nodes carrying `class`.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// All nodes whose widget type is `widget_type`.
    pub fn query_by_type(&self, widget_type: &str) -> Vec<NodeId> {
        self.query_all(|data| data.widget_type == widget_type)
    }

    /// All nodes matching `predicate`.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}
