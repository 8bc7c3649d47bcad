//! Mirror tree construction from the live widget tree.

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::widgets::mirror_tree::{MirrorNodeId, MirrorTree, NodeLabel};

/// Rebuild `tree` from the live subtree rooted at `root`.
///
/// The tree is cleared first. `root` itself becomes the single child of the
/// tree's root row, and every structural descendant follows in child order.
/// The subtree at `exclude` (the inspector's own panel) is skipped entirely,
/// and a node counts as a leaf when no children remain after that.
///
/// Returns the number of mirror nodes created.
pub fn build(dom: &Dom, root: NodeId, exclude: Option<NodeId>, tree: &mut MirrorTree) -> usize {
    tree.clear();
    if !dom.contains(root) || Some(root) == exclude {
        return 0;
    }
    let parent = tree.root();
    let count = add_node(dom, root, exclude, tree, parent);
    tracing::debug!(nodes = count, "mirror tree rebuilt");
    count
}

fn add_node(
    dom: &Dom,
    node: NodeId,
    exclude: Option<NodeId>,
    tree: &mut MirrorTree,
    parent: MirrorNodeId,
) -> usize {
    let Some(data) = dom.get(node) else {
        return 0;
    };
    let label = NodeLabel::from_node(data);
    let children: Vec<NodeId> = dom
        .children(node)
        .iter()
        .copied()
        .filter(|&child| Some(child) != exclude)
        .collect();

    if children.is_empty() {
        tree.add_leaf(parent, label, Some(node));
        return 1;
    }
    let branch = tree.add(parent, label, Some(node));
    1 + children
        .into_iter()
        .map(|child| add_node(dom, child, exclude, tree, branch))
        .sum::<usize>()
}
