//! The inspector panel.
//!
//! [`Inspector::mount`] inserts the panel's nodes under the screen root and
//! installs the style rules it needs. From then on everything goes through
//! [`Inspector::handle`], one handler per [`InspectorEvent`] kind. Raw
//! terminal input is turned into events by [`Inspector::route_mouse`] and
//! [`Inspector::route_key`].
//!
//! The panel's own subtree is never mirrored. Mirror labels are rebuilt on
//! every show, so edits made through the fields appear in the tree after the
//! next hide and show.

pub mod builder;
pub mod config;
pub mod hover;
pub mod layout;

pub use config::InspectorConfig;
pub use hover::{HoverState, Hovered};
pub use layout::{PanelArea, PanelLayout};

use crate::css::parser::ParseError;
use crate::css::registry::StyleRegistry;
use crate::dom::node::{NodeData, NodeId};
use crate::event::input::{Key, KeyEvent, MouseAction, MouseBtn, MouseEvent};
use crate::event::message::{Control, Field, InspectorEvent};
use crate::geometry::{Axis, Offset};
use crate::render::strip::{CellStyle, Strip};
use crate::screen::Screen;
use crate::validation::IdentifierValidator;
use crate::widget::traits::Widget;
use crate::widgets::{MirrorTree, ResizeBar, StyleViewer, Tabs, TextField};

/// Registry key of the hover marker rule.
pub const HIGHLIGHT_KEY: &str = "inspector-highlight";

/// Class carried by a field node while its value fails validation.
pub const INVALID_CLASS: &str = "-invalid";

const CSS_TAB: usize = 0;
const FIELDS_TAB: usize = 1;

// ---------------------------------------------------------------------------
// PanelNodes
// ---------------------------------------------------------------------------

/// Live nodes making up the panel.
///
/// ```text
/// Inspector#inspector
/// ├── HorizontalResizeBar
/// ├── DOMTree
/// └── VerticalGroup#tabcontentwrapper
///     ├── VerticalResizeBar
///     └── TabbedContent
///         ├── TextArea
///         ├── Input#id-input
///         └── Input#classes-input
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelNodes {
    pub panel: NodeId,
    pub horizontal_bar: NodeId,
    pub tree: NodeId,
    pub tab_wrapper: NodeId,
    pub vertical_bar: NodeId,
    pub tabs: NodeId,
    pub style_viewer: NodeId,
    pub id_field: NodeId,
    pub classes_field: NodeId,
}

// ---------------------------------------------------------------------------
// Inspector
// ---------------------------------------------------------------------------

/// The inspector panel mounted into a host screen.
///
/// Owns the mirror tree, resize bars, tabs and fields that draw the panel, and
/// the hover and visibility state that drives them. The live nodes it mounted
/// are listed in [`PanelNodes`].
pub struct Inspector {
    config: InspectorConfig,
    nodes: PanelNodes,
    tree: MirrorTree,
    horizontal_bar: ResizeBar,
    vertical_bar: ResizeBar,
    tabs: Tabs,
    style_viewer: StyleViewer,
    id_field: TextField,
    classes_field: TextField,
    hover: HoverState,
    visible: bool,
    remembered_width: Option<i32>,
    pointer_over_tree: bool,
}

impl Inspector {
    /// Insert a hidden panel under the screen root and install its rules.
    ///
    /// A screen without a root gets a `Screen` root first. Rules are keyed, so
    /// mounting a second inspector on the same screen installs nothing new.
    pub fn mount(screen: &mut Screen, config: InspectorConfig) -> Result<Self, ParseError> {
        let size = screen.size();
        let root = match screen.dom.root() {
            Some(root) => root,
            None => screen
                .dom
                .insert(NodeData::new("Screen").with_size(size.width, size.height)),
        };

        let dom = &mut screen.dom;
        let panel = dom.insert_child(
            root,
            NodeData::new("Inspector")
                .with_id("inspector")
                .with_class(config.hidden_class.clone())
                .with_size(0, size.height),
        );
        let horizontal_bar = dom.insert_child(panel, NodeData::new("HorizontalResizeBar"));
        let tree = dom.insert_child(panel, NodeData::new("DOMTree").focusable(true));
        let tab_wrapper = dom.insert_child(
            panel,
            NodeData::new("VerticalGroup").with_id("tabcontentwrapper"),
        );
        let vertical_bar = dom.insert_child(tab_wrapper, NodeData::new("VerticalResizeBar"));
        let tabs = dom.insert_child(tab_wrapper, NodeData::new("TabbedContent"));
        let style_viewer = dom.insert_child(tabs, NodeData::new("TextArea"));
        let id_field = dom.insert_child(tabs, NodeData::new("Input").with_id("id-input").focusable(true));
        let classes_field = dom.insert_child(
            tabs,
            NodeData::new("Input").with_id("classes-input").focusable(true),
        );
        dom.set_extent(panel, Axis::Horizontal, 0);
        dom.take_updates();

        let nodes = PanelNodes {
            panel,
            horizontal_bar,
            tree,
            tab_wrapper,
            vertical_bar,
            tabs,
            style_viewer,
            id_field,
            classes_field,
        };

        let (min_width, max_width) = config.width_bounds;
        let (min_height, max_height) = config.height_bounds;
        let inspector = Self {
            tree: MirrorTree::new(config.root_label.clone()),
            horizontal_bar: ResizeBar::new(Axis::Horizontal, horizontal_bar, panel)
                .with_bounds(min_width, max_width)
                .with_margin(config.margin),
            vertical_bar: ResizeBar::new(Axis::Vertical, vertical_bar, tab_wrapper)
                .with_bounds(min_height, max_height)
                .with_margin(config.margin),
            tabs: Tabs::new(["CSS", "ID & Classes"]),
            style_viewer: StyleViewer::new().with_placeholder("No TCSS available"),
            id_field: TextField::new()
                .with_placeholder("No IDs")
                .with_validator(IdentifierValidator)
                .valid_empty(true),
            classes_field: TextField::new().with_placeholder("No Classes"),
            hover: HoverState::new(config.highlight_class.clone()),
            visible: false,
            remembered_width: None,
            pointer_over_tree: false,
            nodes,
            config,
        };
        inspector.install_styles(&mut screen.styles)?;
        tracing::debug!(?panel, "inspector mounted");
        Ok(inspector)
    }

    fn install_styles(&self, styles: &mut StyleRegistry) -> Result<(), ParseError> {
        styles.install_once(HIGHLIGHT_KEY, &self.config.highlight_rule())?;
        let panel_css = format!(
            "Inspector {{ dock: right; width: 0.25fr; }}\n\
             Inspector.{} {{ width: 0; }}\n\
             #tabcontentwrapper {{ height: 0.5fr; }}",
            self.config.hidden_class
        );
        styles.install_once("Inspector", &panel_css)?;
        let widgets: [&dyn Widget; 6] = [
            &self.horizontal_bar,
            &self.vertical_bar,
            &self.tree,
            &self.tabs,
            &self.style_viewer,
            &self.id_field,
        ];
        for widget in widgets {
            let css = widget.default_css();
            if !css.is_empty() {
                styles.install_once(widget.widget_type(), css)?;
            }
        }
        Ok(())
    }

    // -- accessors --------------------------------------------------------

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn nodes(&self) -> &PanelNodes {
        &self.nodes
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Width saved by the last hide.
    pub fn remembered_width(&self) -> Option<i32> {
        self.remembered_width
    }

    pub fn tree(&self) -> &MirrorTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MirrorTree {
        &mut self.tree
    }

    pub fn horizontal_bar(&self) -> &ResizeBar {
        &self.horizontal_bar
    }

    pub fn vertical_bar(&self) -> &ResizeBar {
        &self.vertical_bar
    }

    pub fn tabs(&self) -> &Tabs {
        &self.tabs
    }

    pub fn style_viewer(&self) -> &StyleViewer {
        &self.style_viewer
    }

    pub fn id_field(&self) -> &TextField {
        &self.id_field
    }

    pub fn classes_field(&self) -> &TextField {
        &self.classes_field
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Current on-screen geometry. Everything is empty while hidden.
    pub fn layout(&self, screen: &Screen) -> PanelLayout {
        PanelLayout::compute(
            screen.size(),
            screen.dom.size(self.nodes.panel).width,
            screen.dom.size(self.nodes.tab_wrapper).height,
        )
    }

    fn control_node(&self, control: Control) -> NodeId {
        match control {
            Control::HorizontalBar => self.nodes.horizontal_bar,
            Control::VerticalBar => self.nodes.vertical_bar,
            Control::Tree => self.nodes.tree,
        }
    }

    fn captured_bar(&self, screen: &Screen) -> Option<Control> {
        let owner = screen.capture.owner()?;
        [Control::HorizontalBar, Control::VerticalBar]
            .into_iter()
            .find(|&control| self.control_node(control) == owner)
    }

    // -- visibility -------------------------------------------------------

    /// Show when hidden, hide when shown. Returns the transition applied.
    pub fn toggle(&mut self, screen: &mut Screen) -> InspectorEvent {
        let event = if self.visible {
            InspectorEvent::Hidden
        } else {
            InspectorEvent::Shown
        };
        self.handle(screen, event.clone());
        event
    }

    fn show(&mut self, screen: &mut Screen) {
        if self.visible {
            return;
        }
        self.visible = true;
        let size = screen.size();
        let width = self
            .remembered_width
            .unwrap_or_else(|| self.config.default_width(size.width));
        let tab_height = self.config.default_tab_height(size.height);
        let nodes = self.nodes;
        let hidden = self.config.hidden_class.as_str();
        screen.dom.batch(|dom| {
            dom.remove_class(nodes.panel, hidden);
            dom.set_extent(nodes.panel, Axis::Horizontal, width);
            if dom.size(nodes.tab_wrapper).height == 0 {
                dom.set_extent(nodes.tab_wrapper, Axis::Vertical, tab_height);
            }
        });

        let mirrored = match screen.dom.root() {
            Some(root) => builder::build(&screen.dom, root, Some(nodes.panel), &mut self.tree),
            None => 0,
        };
        self.tree.expand_all();
        screen.focus.rebuild(&screen.dom, nodes.panel);
        screen.focus.focus_node(nodes.tree);
        self.sync_focus(screen);
        let layout = self.layout(screen);
        self.sync_viewport(&layout);
        tracing::debug!(width, mirrored, "inspector shown");
    }

    fn hide(&mut self, screen: &mut Screen) {
        if !self.visible {
            return;
        }
        self.visible = false;
        let nodes = self.nodes;
        let width = screen.dom.size(nodes.panel).width;
        self.remembered_width = Some(width);
        self.horizontal_bar.release(screen);
        self.vertical_bar.release(screen);

        let hidden = self.config.hidden_class.as_str();
        screen.dom.batch(|dom| {
            dom.set_extent(nodes.panel, Axis::Horizontal, 0);
            dom.add_class(nodes.panel, hidden);
        });
        self.hover.leave(&mut screen.dom);
        self.tree.set_hover_line(None);
        self.pointer_over_tree = false;
        screen.focus.clear();
        self.sync_focus(screen);
        tracing::debug!(remembered = width, "inspector hidden");
    }

    // -- event handling ---------------------------------------------------

    /// React to one event. Returns follow-up events for the caller's queue.
    ///
    /// While a control holds the pointer capture, pointer events addressed to
    /// any other control are dropped.
    pub fn handle(&mut self, screen: &mut Screen, event: InspectorEvent) -> Vec<InspectorEvent> {
        if let Some(control) = event.pointer_control() {
            if let Some(owner) = screen.capture.owner() {
                if owner != self.control_node(control) {
                    tracing::trace!(event = event.name(), "pointer captured elsewhere");
                    return Vec::new();
                }
            }
            let is_release = matches!(event, InspectorEvent::PointerUp { .. });
            if !self.visible && !is_release {
                return Vec::new();
            }
        }

        match event {
            InspectorEvent::PointerDown { control, position } => {
                self.on_pointer_down(screen, control, position).into_iter().collect()
            }
            InspectorEvent::PointerMove { control, position } => {
                self.on_pointer_move(screen, control, position);
                Vec::new()
            }
            InspectorEvent::PointerUp { control } => {
                self.on_pointer_up(screen, control);
                Vec::new()
            }
            InspectorEvent::PointerLeave { control } => {
                self.on_pointer_leave(screen, control);
                Vec::new()
            }
            InspectorEvent::NodeHighlighted { line } => {
                self.on_node_highlighted(screen, line);
                Vec::new()
            }
            InspectorEvent::FieldChanged { field, value } => {
                self.on_field_changed(screen, field, &value);
                Vec::new()
            }
            InspectorEvent::Shown => {
                self.show(screen);
                Vec::new()
            }
            InspectorEvent::Hidden => {
                self.hide(screen);
                Vec::new()
            }
        }
    }

    fn on_pointer_down(
        &mut self,
        screen: &mut Screen,
        control: Control,
        position: Offset,
    ) -> Option<InspectorEvent> {
        match control {
            Control::HorizontalBar => {
                self.horizontal_bar.press(screen, position);
                None
            }
            Control::VerticalBar => {
                self.vertical_bar.press(screen, position);
                None
            }
            Control::Tree => {
                let line = self.tree_line_at(screen, position)?;
                screen.focus.focus_node(self.nodes.tree);
                self.sync_focus(screen);
                self.tree
                    .set_cursor_line(line)
                    .map(|line| InspectorEvent::NodeHighlighted { line })
            }
        }
    }

    fn on_pointer_move(&mut self, screen: &mut Screen, control: Control, position: Offset) {
        match control {
            Control::HorizontalBar => {
                self.horizontal_bar.drag_to(screen, position);
            }
            Control::VerticalBar => {
                self.vertical_bar.drag_to(screen, position);
            }
            Control::Tree => {
                let Some(line) = self.tree_line_at(screen, position) else {
                    return;
                };
                let widget = self.tree.data_at_line(line);
                if self.hover.hover(&mut screen.dom, line, widget) {
                    self.tree.set_hover_line(Some(line));
                }
            }
        }
    }

    fn on_pointer_up(&mut self, screen: &mut Screen, control: Control) {
        match control {
            Control::HorizontalBar => self.horizontal_bar.release(screen),
            Control::VerticalBar => self.vertical_bar.release(screen),
            Control::Tree => {}
        }
    }

    fn on_pointer_leave(&mut self, screen: &mut Screen, control: Control) {
        if control == Control::Tree {
            self.hover.leave(&mut screen.dom);
            self.tree.set_hover_line(None);
            self.pointer_over_tree = false;
        }
    }

    fn on_node_highlighted(&mut self, screen: &mut Screen, line: usize) {
        let Some(widget) = self.tree.data_at_line(line) else {
            tracing::trace!(line, "highlighted row has no widget");
            return;
        };
        let Some(data) = screen.dom.get(widget) else {
            tracing::debug!(line, "highlighted widget no longer exists");
            return;
        };
        self.id_field.set_value(data.id_or_empty());
        let marker = self.config.highlight_class.as_str();
        let classes: Vec<&str> = data
            .classes
            .iter()
            .map(String::as_str)
            .filter(|&class| class != marker)
            .collect();
        self.classes_field.set_value(classes.join(" "));
        self.style_viewer.load_text(data.style_css());
        self.sync_invalid(screen, Field::Id);
        self.sync_invalid(screen, Field::Classes);
    }

    fn on_field_changed(&mut self, screen: &mut Screen, field: Field, value: &str) {
        let Some(widget) = self
            .tree
            .cursor_node()
            .and_then(|node| self.tree.get(node)?.data)
        else {
            tracing::trace!(field = field.as_str(), "no selection; edit dropped");
            return;
        };
        if !screen.dom.contains(widget) {
            tracing::debug!(field = field.as_str(), "selected widget no longer exists");
            return;
        }
        match field {
            Field::Id => {
                let result = self.id_field.check(value);
                if let Some(reason) = result.failure_description() {
                    tracing::debug!(reason, "identifier rejected");
                    return;
                }
                screen.dom.set_node_id(widget, value);
                if let Some(parent) = screen.dom.parent(widget) {
                    screen.dom.mark_children_updated(parent);
                }
            }
            Field::Classes => {
                // The hover marker is not a user class; keep it only where the
                // hover currently is.
                let marker = self.config.highlight_class.as_str();
                let hovered = self.hover.current().is_some_and(|h| h.widget == widget);
                let mut classes: Vec<&str> =
                    value.split_whitespace().filter(|&class| class != marker).collect();
                if hovered {
                    classes.push(marker);
                }
                screen.dom.set_classes(widget, classes);
            }
        }
        tracing::trace!(field = field.as_str(), value, "edit applied");
    }

    fn tree_line_at(&mut self, screen: &Screen, position: Offset) -> Option<usize> {
        let layout = self.layout(screen);
        self.sync_viewport(&layout);
        if !layout.tree.contains(position) {
            return None;
        }
        self.tree.line_at_viewport_row(position.y - layout.tree.y)
    }

    // -- input routing ----------------------------------------------------

    /// Translate a mouse event into inspector events.
    ///
    /// While one of the bars holds the capture, every motion and the release
    /// go to that bar regardless of position. Tab header and field clicks and
    /// wheel scrolling act directly.
    pub fn route_mouse(&mut self, screen: &mut Screen, mouse: &MouseEvent) -> Vec<InspectorEvent> {
        if !self.visible {
            return Vec::new();
        }
        let position = mouse.position();
        if let Some(control) = self.captured_bar(screen) {
            return match mouse.kind {
                MouseAction::Moved | MouseAction::Drag(_) => {
                    vec![InspectorEvent::PointerMove { control, position }]
                }
                MouseAction::Up(_) => vec![InspectorEvent::PointerUp { control }],
                _ => Vec::new(),
            };
        }

        let layout = self.layout(screen);
        self.sync_viewport(&layout);
        let area = layout.hit(position);
        let mut events = Vec::new();
        let over_tree = area == Some(PanelArea::Tree);
        if self.pointer_over_tree && !over_tree {
            events.push(InspectorEvent::PointerLeave { control: Control::Tree });
        }
        self.pointer_over_tree = over_tree;

        let left_down = mouse.kind == MouseAction::Down(MouseBtn::Left);
        match (mouse.kind, area) {
            (_, Some(PanelArea::HorizontalBar)) if left_down => events.push(InspectorEvent::PointerDown {
                control: Control::HorizontalBar,
                position,
            }),
            (_, Some(PanelArea::VerticalBar)) if left_down => events.push(InspectorEvent::PointerDown {
                control: Control::VerticalBar,
                position,
            }),
            (_, Some(PanelArea::Tree)) if left_down => events.push(InspectorEvent::PointerDown {
                control: Control::Tree,
                position,
            }),
            (MouseAction::Moved | MouseAction::Drag(_), Some(PanelArea::Tree)) => {
                events.push(InspectorEvent::PointerMove { control: Control::Tree, position });
            }
            (MouseAction::ScrollUp, Some(PanelArea::Tree)) => self.tree.scroll.scroll_by(-1),
            (MouseAction::ScrollDown, Some(PanelArea::Tree)) => self.tree.scroll.scroll_by(1),
            (_, Some(PanelArea::TabHeaders)) if left_down => {
                if let Some(tab) = self.tabs.header_at(position.x - layout.tab_headers.x) {
                    self.tabs.activate(tab);
                }
            }
            (_, Some(PanelArea::TabBody)) if left_down && self.tabs.active() == FIELDS_TAB => {
                let target = if layout.id_field().contains(position) {
                    Some(self.nodes.id_field)
                } else if layout.classes_field().contains(position) {
                    Some(self.nodes.classes_field)
                } else {
                    None
                };
                if let Some(node) = target {
                    screen.focus.focus_node(node);
                    self.sync_focus(screen);
                }
            }
            _ => {}
        }
        events
    }

    /// Translate a key press into inspector events.
    ///
    /// Tab and Shift+Tab cycle focus inside the panel. The focused control
    /// gets every other key.
    pub fn route_key(&mut self, screen: &mut Screen, key: &KeyEvent) -> Vec<InspectorEvent> {
        if !self.visible {
            return Vec::new();
        }
        match key.code {
            Key::Tab => {
                screen.focus.focus_next();
                self.sync_focus(screen);
                return Vec::new();
            }
            Key::BackTab => {
                screen.focus.focus_previous();
                self.sync_focus(screen);
                return Vec::new();
            }
            _ => {}
        }

        let focused = screen.focus.current_node();
        if focused == Some(self.nodes.tree) {
            self.tree_key(key).into_iter().collect()
        } else if focused == Some(self.nodes.id_field) {
            self.field_key(screen, Field::Id, key)
        } else if focused == Some(self.nodes.classes_field) {
            self.field_key(screen, Field::Classes, key)
        } else {
            Vec::new()
        }
    }

    fn tree_key(&mut self, key: &KeyEvent) -> Option<InspectorEvent> {
        let page = self.tree.scroll.viewport_height.max(1);
        let moved = match key.code {
            Key::Up => self.tree.move_cursor(-1),
            Key::Down => self.tree.move_cursor(1),
            Key::PageUp => self.tree.move_cursor(-page),
            Key::PageDown => self.tree.move_cursor(page),
            Key::Home => self.tree.set_cursor_line(0),
            Key::End => {
                let last = self.tree.line_count().saturating_sub(1);
                self.tree.set_cursor_line(last)
            }
            Key::Enter | Key::Char(' ') => {
                if let Some(node) = self.tree.cursor_node() {
                    self.tree.toggle(node);
                }
                None
            }
            _ => None,
        };
        moved.map(|line| InspectorEvent::NodeHighlighted { line })
    }

    fn field_key(&mut self, screen: &mut Screen, field: Field, key: &KeyEvent) -> Vec<InspectorEvent> {
        let text_field = match field {
            Field::Id => &mut self.id_field,
            Field::Classes => &mut self.classes_field,
        };
        if !text_field.handle_key(key) {
            return Vec::new();
        }
        let value = text_field.value().to_owned();
        self.sync_invalid(screen, field);
        vec![InspectorEvent::FieldChanged { field, value }]
    }

    fn sync_focus(&mut self, screen: &Screen) {
        let focused = screen.focus.current_node();
        self.tree.set_focused(focused == Some(self.nodes.tree));
        self.id_field.set_focused(focused == Some(self.nodes.id_field));
        self.classes_field
            .set_focused(focused == Some(self.nodes.classes_field));
        if self.id_field.is_focused() || self.classes_field.is_focused() {
            self.tabs.activate(FIELDS_TAB);
        }
    }

    fn sync_invalid(&self, screen: &mut Screen, field: Field) {
        let (node, valid) = match field {
            Field::Id => (self.nodes.id_field, self.id_field.is_valid()),
            Field::Classes => (self.nodes.classes_field, self.classes_field.is_valid()),
        };
        if valid {
            screen.dom.remove_class(node, INVALID_CLASS);
        } else {
            screen.dom.add_class(node, INVALID_CLASS);
        }
    }

    fn sync_viewport(&mut self, layout: &PanelLayout) {
        self.tree.scroll.set_viewport_height(layout.tree.height);
    }

    // -- rendering --------------------------------------------------------

    /// Draw the panel into the screen's compositor. Nothing is drawn while
    /// hidden.
    pub fn render(&mut self, screen: &mut Screen) {
        if !self.visible {
            return;
        }
        let layout = self.layout(screen);
        self.sync_viewport(&layout);

        let mut strips: Vec<Strip> = (layout.panel.y..layout.panel.bottom())
            .map(|y| {
                let mut blank = Strip::new(y, layout.panel.x);
                blank.fill(layout.panel.width, CellStyle::new());
                blank
            })
            .collect();
        strips.extend(self.horizontal_bar.render(layout.horizontal_bar));
        strips.extend(self.tree.render(layout.tree));
        strips.extend(self.vertical_bar.render(layout.vertical_bar));
        strips.extend(self.tabs.render(layout.tab_headers));
        if self.tabs.active() == CSS_TAB {
            strips.extend(self.style_viewer.render(layout.tab_body));
        } else {
            strips.extend(self.id_field.render(layout.id_field()));
            strips.extend(self.classes_field.render(layout.classes_field()));
        }
        screen.compositor.place_strips(&strips, layout.panel);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::Modifiers;
    use crate::geometry::Size;
    use pretty_assertions::assert_eq;

    struct Host {
        screen: Screen,
        header: NodeId,
        body: NodeId,
        save: NodeId,
    }

    /// Screen > [Header#top, Vertical.body > [Button#save.btn, Label]]
    ///
    /// Once shown on 80x24, tree lines are 0 Application, 1 Screen,
    /// 2 Header, 3 Vertical, 4 Button, 5 Label.
    fn host() -> Host {
        let mut screen = Screen::new(80, 24);
        let root = screen.dom.insert(NodeData::new("Screen"));
        let header = screen.dom.insert_child(root, NodeData::new("Header").with_id("top"));
        let body = screen
            .dom
            .insert_child(root, NodeData::new("Vertical").with_class("body"));
        let save = screen.dom.insert_child(
            body,
            NodeData::new("Button")
                .with_id("save")
                .with_class("btn")
                .with_style("color: red;")
                .unwrap(),
        );
        screen.dom.insert_child(body, NodeData::new("Label"));
        Host { screen, header, body, save }
    }

    fn shown() -> (Host, Inspector) {
        let mut host = host();
        let mut inspector = Inspector::mount(&mut host.screen, InspectorConfig::default()).unwrap();
        inspector.toggle(&mut host.screen);
        (host, inspector)
    }

    /// Handle `event` and every follow-up it produces.
    fn run(inspector: &mut Inspector, screen: &mut Screen, event: InspectorEvent) {
        let mut pending = vec![event];
        while let Some(next) = pending.pop() {
            pending.extend(inspector.handle(screen, next));
        }
    }

    fn has_class(screen: &Screen, id: NodeId, class: &str) -> bool {
        screen.dom.get(id).unwrap().has_class(class)
    }

    fn select(inspector: &mut Inspector, screen: &mut Screen, line: usize) {
        inspector.tree_mut().set_cursor_line(line);
        run(inspector, screen, InspectorEvent::NodeHighlighted { line });
    }

    // ── Mount ────────────────────────────────────────────────────────

    #[test]
    fn mount_starts_hidden() {
        let mut host = host();
        let inspector = Inspector::mount(&mut host.screen, InspectorConfig::default()).unwrap();
        let panel = inspector.nodes().panel;
        assert!(!inspector.is_visible());
        assert!(has_class(&host.screen, panel, "-hide"));
        assert_eq!(host.screen.dom.size(panel).width, 0);
        assert!(host.screen.dom.take_updates().is_empty());
    }

    #[test]
    fn mount_installs_rules_once() {
        let mut host = host();
        Inspector::mount(&mut host.screen, InspectorConfig::default()).unwrap();
        let installed = host.screen.styles.len();
        assert!(host.screen.styles.is_installed(HIGHLIGHT_KEY));
        assert_eq!(host.screen.styles.declarations_for_class("-highlight").count(), 1);

        Inspector::mount(&mut host.screen, InspectorConfig::default()).unwrap();
        assert_eq!(host.screen.styles.len(), installed);
    }

    #[test]
    fn mount_without_root_creates_one() {
        let mut screen = Screen::new(40, 10);
        let inspector = Inspector::mount(&mut screen, InspectorConfig::default()).unwrap();
        let root = screen.dom.root().unwrap();
        assert_eq!(screen.dom.parent(inspector.nodes().panel), Some(root));
    }

    // ── Show / hide ──────────────────────────────────────────────────

    #[test]
    fn show_mirrors_host_tree_without_panel() {
        let (host, inspector) = shown();
        let labels: Vec<String> = inspector
            .tree()
            .lines()
            .iter()
            .map(|line| inspector.tree().get(line.node).unwrap().label.to_string())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Application",
                "Screen",
                "Header id=\"top\"",
                "Vertical class=\"body\"",
                "Button id=\"save\" class=\"btn\"",
                "Label",
            ]
        );
        assert_eq!(inspector.tree().data_at_line(2), Some(host.header));
    }

    #[test]
    fn first_show_uses_default_sizes_and_focuses_tree() {
        let (host, inspector) = shown();
        let nodes = inspector.nodes();
        assert_eq!(host.screen.dom.size(nodes.panel).width, 20);
        assert_eq!(host.screen.dom.size(nodes.tab_wrapper).height, 12);
        assert!(!has_class(&host.screen, nodes.panel, "-hide"));
        assert_eq!(host.screen.focused_node(), Some(nodes.tree));
        assert!(inspector.tree().is_focused());
    }

    #[test]
    fn hide_show_hide_restores_width() {
        let (mut host, mut inspector) = shown();
        let panel = inspector.nodes().panel;
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerDown {
            control: Control::HorizontalBar,
            position: Offset::new(60, 3),
        });
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerMove {
            control: Control::HorizontalBar,
            position: Offset::new(47, 3),
        });
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerUp { control: Control::HorizontalBar });
        assert_eq!(host.screen.dom.size(panel).width, 33);

        assert_eq!(inspector.toggle(&mut host.screen), InspectorEvent::Hidden);
        assert_eq!(host.screen.dom.size(panel).width, 0);
        assert_eq!(inspector.remembered_width(), Some(33));
        assert_eq!(inspector.toggle(&mut host.screen), InspectorEvent::Shown);
        assert_eq!(host.screen.dom.size(panel).width, 33);
        inspector.toggle(&mut host.screen);
        assert_eq!(inspector.remembered_width(), Some(33));
    }

    #[test]
    fn repeated_show_is_noop() {
        let (mut host, mut inspector) = shown();
        host.screen.dom.take_updates();
        run(&mut inspector, &mut host.screen, InspectorEvent::Shown);
        assert!(host.screen.dom.take_updates().is_empty());
    }

    #[test]
    fn hide_clears_hover_and_releases_bars() {
        let (mut host, mut inspector) = shown();
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerMove {
            control: Control::Tree,
            position: Offset::new(70, 2),
        });
        assert!(has_class(&host.screen, host.header, "-highlight"));
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerDown {
            control: Control::VerticalBar,
            position: Offset::new(70, 12),
        });

        inspector.toggle(&mut host.screen);
        assert!(!has_class(&host.screen, host.header, "-highlight"));
        assert_eq!(inspector.hover().current(), None);
        assert_eq!(host.screen.capture.owner(), None);
        assert!(!inspector.vertical_bar().is_pressed());
    }

    #[test]
    fn rebuild_on_show_picks_up_edits() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 2);
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Id,
            value: "banner".into(),
        });
        let label = |inspector: &Inspector| {
            let node = inspector.tree().node_at_line(2).unwrap();
            inspector.tree().get(node).unwrap().label.to_string()
        };
        assert_eq!(label(&inspector), "Header id=\"top\"");

        inspector.toggle(&mut host.screen);
        inspector.toggle(&mut host.screen);
        assert_eq!(label(&inspector), "Header id=\"banner\"");
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn node_highlighted_fills_fields() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        assert_eq!(inspector.id_field().value(), "save");
        assert_eq!(inspector.classes_field().value(), "btn");
        assert_eq!(inspector.style_viewer().text(), "color: red;");

        select(&mut inspector, &mut host.screen, 5);
        assert_eq!(inspector.id_field().value(), "");
        assert_eq!(inspector.classes_field().value(), "");
        assert_eq!(inspector.style_viewer().text(), "");
    }

    #[test]
    fn highlighting_root_row_changes_nothing() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        select(&mut inspector, &mut host.screen, 0);
        assert_eq!(inspector.id_field().value(), "save");
    }

    #[test]
    fn highlighting_removed_widget_is_noop() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        host.screen.dom.remove(host.header);
        select(&mut inspector, &mut host.screen, 2);
        assert_eq!(inspector.id_field().value(), "save");
    }

    // ── Edits ────────────────────────────────────────────────────────

    #[test]
    fn id_edit_renames_and_marks_parent() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        assert_eq!(host.screen.dom.child_by_id(host.body, "save"), Some(host.save));

        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Id,
            value: "ok_id-1".into(),
        });
        assert_eq!(host.screen.dom.get(host.save).unwrap().id.as_deref(), Some("ok_id-1"));
        assert!(host.screen.dom.children_index_stale(host.body));
        assert_eq!(host.screen.dom.child_by_id(host.body, "ok_id-1"), Some(host.save));
    }

    #[test]
    fn empty_id_clears_identifier() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Id,
            value: String::new(),
        });
        assert_eq!(host.screen.dom.get(host.save).unwrap().id, None);
    }

    #[test]
    fn invalid_id_is_rejected() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Id,
            value: "3bad".into(),
        });
        assert_eq!(host.screen.dom.get(host.save).unwrap().id.as_deref(), Some("save"));
    }

    #[test]
    fn classes_edit_collapses_duplicates() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Classes,
            value: "a b b".into(),
        });
        assert_eq!(host.screen.dom.get(host.save).unwrap().classes, vec!["a", "b"]);
    }

    #[test]
    fn edit_without_cursor_is_dropped() {
        let (mut host, mut inspector) = shown();
        assert_eq!(inspector.tree().cursor_line(), None);
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Classes,
            value: "x".into(),
        });
        assert_eq!(host.screen.dom.get(host.save).unwrap().classes, vec!["btn"]);
    }

    // ── Hover ────────────────────────────────────────────────────────

    #[test]
    fn hover_moves_marker_between_rows() {
        let (mut host, mut inspector) = shown();
        let hover_row = |inspector: &mut Inspector, screen: &mut Screen, y: i32| {
            run(inspector, screen, InspectorEvent::PointerMove {
                control: Control::Tree,
                position: Offset::new(70, y),
            });
        };
        hover_row(&mut inspector, &mut host.screen, 2);
        hover_row(&mut inspector, &mut host.screen, 4);
        assert!(!has_class(&host.screen, host.header, "-highlight"));
        assert!(has_class(&host.screen, host.save, "-highlight"));
        assert_eq!(inspector.tree().hover_line(), Some(4));

        host.screen.dom.take_updates();
        hover_row(&mut inspector, &mut host.screen, 4);
        assert!(host.screen.dom.take_updates().is_empty());

        run(&mut inspector, &mut host.screen, InspectorEvent::PointerLeave { control: Control::Tree });
        assert!(!has_class(&host.screen, host.save, "-highlight"));
        assert_eq!(inspector.tree().hover_line(), None);
    }

    fn hover_at(inspector: &mut Inspector, screen: &mut Screen, y: i32) {
        run(inspector, screen, InspectorEvent::PointerMove {
            control: Control::Tree,
            position: Offset::new(70, y),
        });
    }

    #[test]
    fn selecting_hovered_row_hides_marker_from_classes_field() {
        let (mut host, mut inspector) = shown();
        hover_at(&mut inspector, &mut host.screen, 4);
        select(&mut inspector, &mut host.screen, 4);
        assert_eq!(inspector.classes_field().value(), "btn");
    }

    #[test]
    fn classes_edit_never_spreads_marker() {
        let (mut host, mut inspector) = shown();
        hover_at(&mut inspector, &mut host.screen, 4);
        select(&mut inspector, &mut host.screen, 4);
        hover_at(&mut inspector, &mut host.screen, 2);
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Classes,
            value: "btn -highlight big".into(),
        });
        assert_eq!(host.screen.dom.get(host.save).unwrap().classes, vec!["btn", "big"]);
        assert_eq!(host.screen.dom.query_by_class("-highlight"), vec![host.header]);
    }

    #[test]
    fn classes_edit_keeps_marker_on_hovered_widget() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        hover_at(&mut inspector, &mut host.screen, 4);
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Classes,
            value: "primary".into(),
        });
        assert_eq!(
            host.screen.dom.get(host.save).unwrap().classes,
            vec!["primary", "-highlight"]
        );
    }

    #[test]
    fn collapsing_an_ancestor_moves_edit_target_to_it() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 5);
        let vertical = inspector.tree().node_at_line(3).unwrap();
        inspector.tree_mut().toggle(vertical);
        assert_eq!(inspector.tree().cursor_node(), Some(vertical));
        assert_eq!(inspector.tree().cursor_line(), Some(3));
        run(&mut inspector, &mut host.screen, InspectorEvent::FieldChanged {
            field: Field::Classes,
            value: "moved".into(),
        });
        assert_eq!(host.screen.dom.get(host.body).unwrap().classes, vec!["moved"]);
        assert_eq!(host.screen.dom.get(host.save).unwrap().classes, vec!["btn"]);
    }

    // ── Capture ──────────────────────────────────────────────────────

    #[test]
    fn captured_bar_blocks_other_controls() {
        let (mut host, mut inspector) = shown();
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerDown {
            control: Control::HorizontalBar,
            position: Offset::new(60, 3),
        });
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerMove {
            control: Control::Tree,
            position: Offset::new(70, 2),
        });
        assert!(!has_class(&host.screen, host.header, "-highlight"));
        run(&mut inspector, &mut host.screen, InspectorEvent::PointerDown {
            control: Control::VerticalBar,
            position: Offset::new(70, 12),
        });
        assert!(!inspector.vertical_bar().is_pressed());
    }

    // ── Routing ──────────────────────────────────────────────────────

    fn mouse(inspector: &mut Inspector, screen: &mut Screen, kind: MouseAction, x: u16, y: u16) {
        let events = inspector.route_mouse(screen, &MouseEvent::new(kind, x, y));
        for event in events {
            run(inspector, screen, event);
        }
    }

    fn key(inspector: &mut Inspector, screen: &mut Screen, code: Key) {
        let events = inspector.route_key(screen, &KeyEvent::plain(code));
        for event in events {
            run(inspector, screen, event);
        }
    }

    #[test]
    fn mouse_drag_resizes_through_capture() {
        let (mut host, mut inspector) = shown();
        let panel = inspector.nodes().panel;
        mouse(&mut inspector, &mut host.screen, MouseAction::Down(MouseBtn::Left), 60, 5);
        assert!(inspector.horizontal_bar().is_pressed());
        // Far outside the bar, still delivered to it.
        mouse(&mut inspector, &mut host.screen, MouseAction::Drag(MouseBtn::Left), 30, 20);
        assert_eq!(host.screen.dom.size(panel).width, 50);
        mouse(&mut inspector, &mut host.screen, MouseAction::Up(MouseBtn::Left), 30, 20);
        assert!(!inspector.horizontal_bar().is_pressed());
        assert_eq!(host.screen.capture.owner(), None);
    }

    #[test]
    fn mouse_leaving_tree_clears_hover() {
        let (mut host, mut inspector) = shown();
        mouse(&mut inspector, &mut host.screen, MouseAction::Moved, 70, 3);
        assert!(has_class(&host.screen, host.body, "-highlight"));
        mouse(&mut inspector, &mut host.screen, MouseAction::Moved, 10, 3);
        assert!(!has_class(&host.screen, host.body, "-highlight"));
    }

    #[test]
    fn click_on_row_selects_widget() {
        let (mut host, mut inspector) = shown();
        mouse(&mut inspector, &mut host.screen, MouseAction::Down(MouseBtn::Left), 70, 4);
        assert_eq!(inspector.tree().cursor_line(), Some(4));
        assert_eq!(inspector.id_field().value(), "save");
    }

    #[test]
    fn click_on_tab_header_switches_tab() {
        let (mut host, mut inspector) = shown();
        assert_eq!(inspector.tabs().active(), 0);
        // Headers start at column 61 on row 13; " CSS " is 5 wide.
        mouse(&mut inspector, &mut host.screen, MouseAction::Down(MouseBtn::Left), 67, 13);
        assert_eq!(inspector.tabs().active(), 1);
        mouse(&mut inspector, &mut host.screen, MouseAction::Down(MouseBtn::Left), 62, 13);
        assert_eq!(inspector.tabs().active(), 0);
    }

    #[test]
    fn keyboard_selection_and_editing() {
        let (mut host, mut inspector) = shown();
        for _ in 0..5 {
            key(&mut inspector, &mut host.screen, Key::Down);
        }
        assert_eq!(inspector.tree().cursor_line(), Some(4));
        assert_eq!(inspector.classes_field().value(), "btn");

        key(&mut inspector, &mut host.screen, Key::Tab);
        key(&mut inspector, &mut host.screen, Key::Tab);
        assert_eq!(host.screen.focused_node(), Some(inspector.nodes().classes_field));
        assert_eq!(inspector.tabs().active(), 1);

        for ch in " big".chars() {
            key(&mut inspector, &mut host.screen, Key::Char(ch));
        }
        assert_eq!(host.screen.dom.get(host.save).unwrap().classes, vec!["btn", "big"]);
    }

    #[test]
    fn invalid_typed_id_marks_field() {
        let (mut host, mut inspector) = shown();
        select(&mut inspector, &mut host.screen, 4);
        key(&mut inspector, &mut host.screen, Key::Tab);
        key(&mut inspector, &mut host.screen, Key::Home);
        key(&mut inspector, &mut host.screen, Key::Char('3'));
        let id_node = inspector.nodes().id_field;
        assert!(has_class(&host.screen, id_node, INVALID_CLASS));
        assert_eq!(host.screen.dom.get(host.save).unwrap().id.as_deref(), Some("save"));

        key(&mut inspector, &mut host.screen, Key::Delete);
        key(&mut inspector, &mut host.screen, Key::Backspace);
        assert!(!has_class(&host.screen, id_node, INVALID_CLASS));
    }

    #[test]
    fn enter_toggles_cursor_node() {
        let (mut host, mut inspector) = shown();
        for _ in 0..4 {
            key(&mut inspector, &mut host.screen, Key::Down);
        }
        assert_eq!(inspector.tree().cursor_line(), Some(3));
        assert_eq!(inspector.tree().line_count(), 6);
        key(&mut inspector, &mut host.screen, Key::Enter);
        assert_eq!(inspector.tree().line_count(), 4);
    }

    #[test]
    fn hidden_panel_ignores_input() {
        let mut host = host();
        let mut inspector = Inspector::mount(&mut host.screen, InspectorConfig::default()).unwrap();
        let down_key = KeyEvent::new(Key::Down, Modifiers::NONE);
        assert!(inspector.route_key(&mut host.screen, &down_key).is_empty());
        let down = MouseEvent::new(MouseAction::Down(MouseBtn::Left), 79, 0);
        assert!(inspector.route_mouse(&mut host.screen, &down).is_empty());
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn render_draws_panel_on_the_right() {
        let (mut host, mut inspector) = shown();
        inspector.render(&mut host.screen);
        let compositor = &host.screen.compositor;
        assert_eq!(compositor.row_text(0), format!("{}▌▼ Application", " ".repeat(60)));
        assert!(compositor.row_text(12).ends_with("▀▀▀"));
        assert_eq!(compositor.row_text(13).trim_start(), "▌ CSS  ID & Classes");
        assert_eq!(compositor.row_text(14).trim_start(), "▌No TCSS available");
    }

    #[test]
    fn layout_is_empty_while_hidden() {
        let mut host = host();
        let inspector = Inspector::mount(&mut host.screen, InspectorConfig::default()).unwrap();
        assert!(inspector.layout(&host.screen).panel.is_empty());
        assert_eq!(host.screen.size(), Size::new(80, 24));
    }
}
