//! MirrorTree: a collapsible tree of labeled nodes that refer back to live
//! widgets.
//!
//! Nodes live in a slotmap arena owned by the tree. Each node's `data` is an
//! `Option<NodeId>` into the host [`Dom`](crate::dom::Dom); the tree never owns
//! or keeps alive the widget it points at. [`MirrorTree::clear`] drops every
//! node except the root, so ids from before a clear never resolve again.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::dom::node::{NodeData, NodeId};
use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::widget::scroll::ScrollState;
use crate::widget::traits::Widget;

new_key_type! {
    /// Handle to a node of a [`MirrorTree`].
    pub struct MirrorNodeId;
}

// ---------------------------------------------------------------------------
// NodeLabel
// ---------------------------------------------------------------------------

/// The rendered description of a live widget: type name, then `id="…"` when
/// the widget has an identifier, then `class="…"` when it has classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabel {
    pub widget_type: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl NodeLabel {
    /// A bare label with no annotations.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { widget_type: text.into(), id: None, classes: Vec::new() }
    }

    /// Snapshot a live widget's identity.
    pub fn from_node(data: &NodeData) -> Self {
        Self {
            widget_type: data.widget_type.clone(),
            id: data.id.clone().filter(|id| !id.is_empty()),
            classes: data.classes.clone(),
        }
    }

    /// Styled segments: bold type, cyan id, green classes.
    pub fn spans(&self) -> Vec<(String, CellStyle)> {
        let mut spans = vec![(self.widget_type.clone(), CellStyle::new().bold())];
        if let Some(id) = &self.id {
            spans.push((format!(" id=\"{id}\""), CellStyle::new().fg("cyan")));
        }
        if !self.classes.is_empty() {
            spans.push((
                format!(" class=\"{}\"", self.classes.join(" ")),
                CellStyle::new().fg("green"),
            ));
        }
        spans
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (text, _) in self.spans() {
            f.write_str(&text)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MirrorNode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MirrorNode {
    pub label: NodeLabel,
    /// Back-reference to the live widget this node describes.
    pub data: Option<NodeId>,
    children: Vec<MirrorNodeId>,
    allow_expand: bool,
    expanded: bool,
}

impl MirrorNode {
    pub fn children(&self) -> &[MirrorNodeId] {
        &self.children
    }

    /// `false` for nodes created with [`MirrorTree::add_leaf`].
    pub fn allow_expand(&self) -> bool {
        self.allow_expand
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_leaf(&self) -> bool {
        !self.allow_expand
    }
}

/// One visible row of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLine {
    pub node: MirrorNodeId,
    pub depth: usize,
}

// ---------------------------------------------------------------------------
// MirrorTree
// ---------------------------------------------------------------------------

/// A tree widget whose nodes mirror live widgets.
///
/// The root is always shown on line 0. Children of collapsed nodes are hidden.
/// The cursor sits on a node, not a line, so it keeps its target while rows
/// above it appear or disappear. It starts unset and only moves through the
/// cursor methods.
#[derive(Debug)]
pub struct MirrorTree {
    nodes: SlotMap<MirrorNodeId, MirrorNode>,
    root: MirrorNodeId,
    cursor: Option<MirrorNodeId>,
    hover_line: Option<usize>,
    focused: bool,
    pub scroll: ScrollState,
}

impl MirrorTree {
    /// A tree holding only an expanded root with no back-reference.
    pub fn new(root_label: impl Into<String>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(MirrorNode {
            label: NodeLabel::plain(root_label),
            data: None,
            children: Vec::new(),
            allow_expand: true,
            expanded: true,
        });
        Self {
            nodes,
            root,
            cursor: None,
            hover_line: None,
            focused: false,
            scroll: ScrollState::new(1, 0),
        }
    }

    pub fn root(&self) -> MirrorNodeId {
        self.root
    }

    /// Remove every node but the root and reset cursor, hover and scroll.
    pub fn clear(&mut self) {
        let root = self.root;
        self.nodes.retain(|id, _| id == root);
        if let Some(node) = self.nodes.get_mut(root) {
            node.children.clear();
        }
        self.cursor = None;
        self.hover_line = None;
        self.scroll.scroll_to(0);
        self.sync_content_height();
    }

    /// Append an expandable child to `parent`, collapsed.
    pub fn add(&mut self, parent: MirrorNodeId, label: NodeLabel, data: Option<NodeId>) -> MirrorNodeId {
        self.insert(parent, label, data, true)
    }

    /// Append a leaf to `parent`.
    pub fn add_leaf(&mut self, parent: MirrorNodeId, label: NodeLabel, data: Option<NodeId>) -> MirrorNodeId {
        self.insert(parent, label, data, false)
    }

    fn insert(
        &mut self,
        parent: MirrorNodeId,
        label: NodeLabel,
        data: Option<NodeId>,
        allow_expand: bool,
    ) -> MirrorNodeId {
        let id = self.nodes.insert(MirrorNode {
            label,
            data,
            children: Vec::new(),
            allow_expand,
            expanded: false,
        });
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children.push(id);
        }
        self.sync_content_height();
        id
    }

    pub fn get(&self, id: MirrorNodeId) -> Option<&MirrorNode> {
        self.nodes.get(id)
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -- expansion --------------------------------------------------------

    /// Expand every expandable node.
    pub fn expand_all(&mut self) {
        for node in self.nodes.values_mut() {
            if node.allow_expand {
                node.expanded = true;
            }
        }
        self.sync_content_height();
    }

    /// Flip one node's expansion. Leaves are left alone.
    pub fn toggle(&mut self, id: MirrorNodeId) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        if !node.allow_expand {
            return false;
        }
        node.expanded = !node.expanded;
        self.sync_content_height();
        if self.cursor_line().is_none() && self.cursor.is_some() {
            self.cursor = Some(id);
        }
        self.clamp_lines();
        true
    }

    // -- lines ------------------------------------------------------------

    /// Visible rows in display order.
    pub fn lines(&self) -> Vec<TreeLine> {
        let mut lines = Vec::new();
        let mut stack = vec![TreeLine { node: self.root, depth: 0 }];
        while let Some(line) = stack.pop() {
            let Some(node) = self.nodes.get(line.node) else {
                continue;
            };
            lines.push(line);
            if node.expanded {
                stack.extend(
                    node.children
                        .iter()
                        .rev()
                        .map(|&child| TreeLine { node: child, depth: line.depth + 1 }),
                );
            }
        }
        lines
    }

    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    /// The node shown on `line`, if any.
    pub fn node_at_line(&self, line: usize) -> Option<MirrorNodeId> {
        self.lines().get(line).map(|l| l.node)
    }

    /// The live widget behind the node on `line`, if any.
    pub fn data_at_line(&self, line: usize) -> Option<NodeId> {
        self.node_at_line(line).and_then(|id| self.nodes.get(id)?.data)
    }

    // -- cursor and hover -------------------------------------------------

    /// The line the cursor node is shown on. `None` when unset.
    pub fn cursor_line(&self) -> Option<usize> {
        let cursor = self.cursor?;
        self.lines().iter().position(|line| line.node == cursor)
    }

    /// The node under the cursor.
    pub fn cursor_node(&self) -> Option<MirrorNodeId> {
        self.cursor
    }

    /// Move the cursor to `line` (clamped to the last line). Returns the new
    /// line when it changed.
    pub fn set_cursor_line(&mut self, line: usize) -> Option<usize> {
        let last = self.line_count().saturating_sub(1);
        let line = line.min(last);
        if self.cursor_line() == Some(line) {
            return None;
        }
        self.cursor = self.node_at_line(line);
        self.scroll.scroll_to_visible(line as i32);
        Some(line)
    }

    /// Move the cursor by `delta` lines. An unset cursor lands on line 0.
    pub fn move_cursor(&mut self, delta: i32) -> Option<usize> {
        let target = match self.cursor_line() {
            None => 0,
            Some(line) => (line as i64 + i64::from(delta)).max(0) as usize,
        };
        self.set_cursor_line(target)
    }

    pub fn hover_line(&self) -> Option<usize> {
        self.hover_line
    }

    pub fn set_hover_line(&mut self, line: Option<usize>) {
        self.hover_line = line;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Map a row inside the viewport to a tree line.
    pub fn line_at_viewport_row(&self, row: i32) -> Option<usize> {
        self.scroll.content_row(row)
    }

    fn sync_content_height(&mut self) {
        let count = self.line_count() as i32;
        self.scroll.set_content_height(count);
    }

    fn clamp_lines(&mut self) {
        let count = self.line_count();
        if self.hover_line.is_some_and(|line| line >= count) {
            self.hover_line = None;
        }
    }

    fn render_line(&self, line_no: usize, line: TreeLine, cursor: Option<usize>, region: Region, y: i32) -> Strip {
        let (x, width) = (region.x, region.width);
        let mut strip = Strip::new(y, x);
        let Some(node) = self.nodes.get(line.node) else {
            return strip;
        };
        let mut base = CellStyle::new();
        if self.hover_line == Some(line_no) {
            base = base.bg("$boost");
        }
        if self.focused && cursor == Some(line_no) {
            base = base.reverse();
        }
        strip.push_str(&"  ".repeat(line.depth), base.clone());
        let icon = match (node.allow_expand, node.expanded) {
            (false, _) => "  ",
            (true, true) => "▼ ",
            (true, false) => "▶ ",
        };
        strip.push_str(icon, base.clone());
        for (text, style) in node.label.spans() {
            let merged = CellStyle {
                bg: base.bg.clone(),
                reverse: base.reverse,
                ..style
            };
            strip.push_str(&text, merged);
        }
        strip.fill(width, base);
        strip
    }
}

impl Widget for MirrorTree {
    fn widget_type(&self) -> &str {
        "DOMTree"
    }

    fn default_css(&self) -> &str {
        "DOMTree { background: transparent; height: 1fr; }"
    }

    fn can_focus(&self) -> bool {
        true
    }

    fn render(&self, region: Region) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let cursor = self.cursor_line();
        self.lines()
            .into_iter()
            .enumerate()
            .skip(self.scroll.offset.max(0) as usize)
            .take(region.height as usize)
            .zip(region.y..)
            .map(|((line_no, line), y)| self.render_line(line_no, line, cursor, region, y))
            .collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::snapshot::strips_to_string;

    /// ```text
    /// Application
    ///   Screen
    ///     Header#top (leaf)
    ///     Vertical.body
    ///       Button#save (leaf)
    /// ```
    fn sample() -> (MirrorTree, [MirrorNodeId; 4]) {
        let mut tree = MirrorTree::new("Application");
        let root = tree.root();
        let screen = tree.add(root, NodeLabel::plain("Screen"), None);
        let header = tree.add_leaf(
            screen,
            NodeLabel { widget_type: "Header".into(), id: Some("top".into()), classes: vec![] },
            None,
        );
        let body = tree.add(
            screen,
            NodeLabel { widget_type: "Vertical".into(), id: None, classes: vec!["body".into()] },
            None,
        );
        let save = tree.add_leaf(
            body,
            NodeLabel {
                widget_type: "Button".into(),
                id: Some("save".into()),
                classes: vec!["btn".into(), "primary".into()],
            },
            None,
        );
        (tree, [screen, header, body, save])
    }

    // ── Labels ───────────────────────────────────────────────────────

    #[test]
    fn label_annotations() {
        let (tree, [_, header, _, save]) = sample();
        assert_eq!(tree.get(header).unwrap().label.to_string(), "Header id=\"top\"");
        assert_eq!(
            tree.get(save).unwrap().label.to_string(),
            "Button id=\"save\" class=\"btn primary\""
        );
        assert_eq!(NodeLabel::plain("Static").to_string(), "Static");
    }

    #[test]
    fn label_from_node_skips_empty_id() {
        let data = NodeData::new("Label").with_id("").with_class("x");
        let label = NodeLabel::from_node(&data);
        assert_eq!(label.to_string(), "Label class=\"x\"");
    }

    #[test]
    fn label_span_styles() {
        let label = NodeLabel {
            widget_type: "Button".into(),
            id: Some("ok".into()),
            classes: vec!["a".into()],
        };
        let spans = label.spans();
        assert!(spans[0].1.bold);
        assert_eq!(spans[1].1.fg.as_deref(), Some("cyan"));
        assert_eq!(spans[2].1.fg.as_deref(), Some("green"));
    }

    // ── Structure ────────────────────────────────────────────────────

    #[test]
    fn new_tree_has_expanded_root() {
        let tree = MirrorTree::new("Application");
        let root = tree.get(tree.root()).unwrap();
        assert!(root.is_expanded());
        assert!(root.data.is_none());
        assert_eq!(tree.line_count(), 1);
        assert_eq!(tree.cursor_line(), None);
    }

    #[test]
    fn added_nodes_start_collapsed() {
        let (tree, [screen, ..]) = sample();
        assert!(!tree.get(screen).unwrap().is_expanded());
        assert_eq!(tree.lines().len(), 2);
    }

    #[test]
    fn leaves_cannot_expand() {
        let (mut tree, [_, header, ..]) = sample();
        assert!(tree.get(header).unwrap().is_leaf());
        assert!(!tree.toggle(header));
    }

    #[test]
    fn expand_all_shows_everything() {
        let (mut tree, [screen, header, body, save]) = sample();
        tree.expand_all();
        let nodes: Vec<_> = tree.lines().iter().map(|l| l.node).collect();
        assert_eq!(nodes, vec![tree.root(), screen, header, body, save]);
        let depths: Vec<_> = tree.lines().iter().map(|l| l.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 3]);
        assert!(!tree.get(save).unwrap().is_expanded());
    }

    #[test]
    fn expand_all_is_idempotent() {
        let (mut tree, _) = sample();
        tree.expand_all();
        let once = tree.lines();
        tree.expand_all();
        assert_eq!(tree.lines(), once);
    }

    #[test]
    fn toggle_collapses_subtree() {
        let (mut tree, [screen, ..]) = sample();
        tree.expand_all();
        assert!(tree.toggle(screen));
        assert_eq!(tree.line_count(), 2);
        assert!(tree.toggle(screen));
        assert_eq!(tree.line_count(), 5);
    }

    #[test]
    fn clear_invalidates_old_nodes() {
        let (mut tree, [screen, ..]) = sample();
        tree.expand_all();
        tree.set_cursor_line(3);
        tree.clear();
        assert!(tree.get(screen).is_none());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.cursor_line(), None);
        assert!(tree.get(tree.root()).unwrap().children().is_empty());
    }

    // ── Cursor ───────────────────────────────────────────────────────

    #[test]
    fn cursor_moves_and_clamps() {
        let (mut tree, [_, _, body, _]) = sample();
        tree.expand_all();
        assert_eq!(tree.move_cursor(1), Some(0));
        assert_eq!(tree.move_cursor(3), Some(3));
        assert_eq!(tree.cursor_node(), Some(body));
        assert_eq!(tree.move_cursor(10), Some(4));
        assert_eq!(tree.move_cursor(1), None);
        assert_eq!(tree.move_cursor(-10), Some(0));
    }

    #[test]
    fn collapsing_pulls_cursor_back() {
        let (mut tree, [screen, ..]) = sample();
        tree.expand_all();
        tree.set_cursor_line(4);
        tree.set_hover_line(Some(4));
        tree.toggle(screen);
        assert_eq!(tree.cursor_line(), Some(1));
        assert_eq!(tree.cursor_node(), Some(screen));
        assert_eq!(tree.hover_line(), None);
    }

    #[test]
    fn cursor_follows_its_node_when_rows_above_collapse() {
        let (mut tree, [screen, _, body, _]) = sample();
        let root = tree.root();
        let footer = tree.add_leaf(root, NodeLabel::plain("Footer"), None);
        tree.expand_all();
        assert_eq!(tree.set_cursor_line(5), Some(5));
        assert_eq!(tree.cursor_node(), Some(footer));

        tree.toggle(body);
        assert_eq!(tree.cursor_line(), Some(4));
        assert_eq!(tree.cursor_node(), Some(footer));
        tree.toggle(screen);
        assert_eq!(tree.cursor_line(), Some(2));
        assert_eq!(tree.cursor_node(), Some(footer));
    }

    #[test]
    fn viewport_rows_follow_scroll() {
        let (mut tree, [screen, ..]) = sample();
        tree.expand_all();
        tree.scroll.set_viewport_height(2);
        assert_eq!(tree.line_at_viewport_row(1), Some(1));
        tree.set_cursor_line(4);
        assert_eq!(tree.scroll.offset, 3);
        assert_eq!(tree.line_at_viewport_row(0), Some(3));
        assert_eq!(tree.line_at_viewport_row(2), None);
        assert_eq!(tree.node_at_line(1), Some(screen));
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn render_expanded_tree() {
        let (mut tree, _) = sample();
        tree.expand_all();
        tree.scroll.set_viewport_height(10);
        let strips = tree.render(Region::new(0, 0, 50, 10));
        insta::assert_snapshot!(strips_to_string(&strips, 50, 5), @r#"
        ▼ Application
          ▼ Screen
              Header id="top"
            ▼ Vertical class="body"
                Button id="save" class="btn primary"
        "#);
    }

    #[test]
    fn render_marks_cursor_and_hover() {
        let (mut tree, _) = sample();
        tree.expand_all();
        tree.set_focused(true);
        tree.set_cursor_line(1);
        tree.set_hover_line(Some(2));
        let strips = tree.render(Region::new(0, 0, 30, 5));
        assert!(strips[1].cells.iter().all(|c| c.style.reverse));
        assert!(strips[2].cells.iter().all(|c| c.style.bg.as_deref() == Some("$boost")));
        assert!(!strips[0].cells[0].style.reverse);
    }
}
