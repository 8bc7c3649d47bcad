//! Tree operations, named-child indexes, and batched visual updates.

use std::collections::{HashMap, VecDeque};

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::css::model::Declaration;
use crate::geometry::{Axis, Size};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// Per-parent lookup of children by identifier.
///
/// Changing a child's identifier leaves the index stale until someone calls
/// [`Dom::mark_children_updated`] on the parent; the next lookup rebuilds it.
#[derive(Debug, Default)]
struct NamedChildren {
    by_id: HashMap<String, NodeId>,
    stale: bool,
}

/// One repaint as seen by the terminal: every node whose visual state changed
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualUpdate {
    pub nodes: Vec<NodeId>,
}

/// The live widget tree, backed by a slotmap arena.
///
/// Class and size mutations go through the `Dom` so they can be grouped into
/// [`VisualUpdate`]s. Outside a [`Dom::batch`] every mutation is its own
/// update; inside one, all changes surface as a single update when the
/// outermost batch ends.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    named: SecondaryMap<NodeId, NamedChildren>,
    root: Option<NodeId>,
    batch_depth: usize,
    pending: Vec<NodeId>,
    updates: Vec<VisualUpdate>,
}

impl Dom {
    /// Create an empty DOM.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            named: SecondaryMap::new(),
            root: None,
            batch_depth: 0,
            pending: Vec::new(),
            updates: Vec::new(),
        }
    }

    /// Insert a root-level node. The first one becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.named.insert(id, NamedChildren { stale: true, ..Default::default() });
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(self.nodes.contains_key(parent), "parent node does not exist");
        let id = self.insert(data);
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        self.mark_children_updated(parent);
        id
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
            self.mark_children_updated(parent_id);
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut queue = VecDeque::from([id]);
        let mut removed = None;
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            self.named.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed = data;
            }
        }
        removed
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children of a node in insertion order. Empty for unknown nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Whether `id` is `ancestor` or lies inside its subtree.
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    ///
    /// Changes made through this bypass visual-update tracking.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the DOM.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the DOM is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the DOM contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    // -- identifiers ------------------------------------------------------

    /// Assign a node's identifier. An empty string clears it.
    ///
    /// The parent's named-child index is not touched; call
    /// [`Dom::mark_children_updated`] on the parent afterwards.
    pub fn set_node_id(&mut self, id: NodeId, value: &str) -> bool {
        let Some(data) = self.nodes.get_mut(id) else {
            return false;
        };
        data.id = (!value.is_empty()).then(|| value.to_owned());
        true
    }

    /// Mark `parent`'s index of named children as stale.
    pub fn mark_children_updated(&mut self, parent: NodeId) {
        if let Some(index) = self.named.get_mut(parent) {
            index.stale = true;
        }
    }

    /// Whether `parent`'s named-child index needs a rebuild.
    pub fn children_index_stale(&self, parent: NodeId) -> bool {
        self.named.get(parent).is_some_and(|index| index.stale)
    }

    /// Look up a direct child of `parent` by identifier, rebuilding the index
    /// first when it is stale.
    pub fn child_by_id(&mut self, parent: NodeId, child_id: &str) -> Option<NodeId> {
        if self.children_index_stale(parent) {
            let by_id = self
                .children(parent)
                .iter()
                .filter_map(|&child| {
                    let id = self.nodes.get(child)?.id.clone()?;
                    Some((id, child))
                })
                .collect();
            if let Some(index) = self.named.get_mut(parent) {
                index.by_id = by_id;
                index.stale = false;
            }
        }
        self.named.get(parent)?.by_id.get(child_id).copied()
    }

    // -- visual state -----------------------------------------------------

    /// Run `f` with visual updates grouped into one [`VisualUpdate`].
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Dom) -> R) -> R {
        self.batch_depth += 1;
        let result = f(self);
        self.batch_depth -= 1;
        if self.batch_depth == 0 {
            self.flush();
        }
        result
    }

    fn touch(&mut self, id: NodeId) {
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
        if self.batch_depth == 0 {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let nodes = std::mem::take(&mut self.pending);
            self.updates.push(VisualUpdate { nodes });
        }
    }

    /// Drain the visual updates recorded so far.
    pub fn take_updates(&mut self) -> Vec<VisualUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Add a class to a node. Returns `true` if the node changed.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        let changed = self.nodes.get_mut(id).is_some_and(|data| data.add_class(class));
        if changed {
            self.touch(id);
        }
        changed
    }

    /// Remove a class from a node. Returns `true` if the node changed.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let changed = self.nodes.get_mut(id).is_some_and(|data| data.remove_class(class));
        if changed {
            self.touch(id);
        }
        changed
    }

    /// Replace a node's class set. Returns `false` for unknown nodes.
    pub fn set_classes<'a>(&mut self, id: NodeId, classes: impl IntoIterator<Item = &'a str>) -> bool {
        let Some(data) = self.nodes.get_mut(id) else {
            return false;
        };
        data.set_classes(classes);
        self.touch(id);
        true
    }

    /// Current size of a node (zero for unknown nodes).
    pub fn size(&self, id: NodeId) -> Size {
        self.nodes.get(id).map(|data| data.size).unwrap_or(Size::ZERO)
    }

    /// Set a node's extent along one axis, mirroring it into the node's inline
    /// `width`/`height` declaration. The other axis is untouched.
    pub fn set_extent(&mut self, id: NodeId, axis: Axis, cells: i32) -> bool {
        let Some(data) = self.nodes.get_mut(id) else {
            return false;
        };
        data.size = axis.with_extent(data.size, cells);
        data.set_declaration(Declaration::cells(axis.property(), cells));
        self.touch(id);
        true
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
