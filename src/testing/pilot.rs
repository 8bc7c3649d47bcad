//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`] in headless mode and provides methods to
//! simulate user input (key presses, mouse clicks, hovering, dragging,
//! resizing) and read back the rendered screen. Every input is processed to
//! completion before the method returns.

use crate::app::{App, AppError};
use crate::dom::node::{NodeData, NodeId};
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
use crate::inspector::InspectorConfig;
use crate::testing::snapshot::compositor_to_string;

/// A headless app driver for testing.
///
/// # Examples
///
/// ```ignore
/// use gilt_inspector::dom::NodeData;
/// use gilt_inspector::testing::Pilot;
///
/// let mut pilot = Pilot::new(80, 24)?;
/// let root = pilot.root();
/// pilot.add_widget(root, NodeData::new("Header"));
/// pilot.toggle_inspector();
/// assert!(pilot.app().inspector.is_visible());
/// ```
pub struct Pilot {
    app: App,
    root: NodeId,
}

impl Pilot {
    /// Create a headless app with the given terminal size.
    pub fn new(width: u16, height: u16) -> Result<Self, AppError> {
        Ok(Self::from_app(App::new_headless(width, height)?))
    }

    /// Create a headless app with a custom inspector configuration.
    pub fn with_config(width: u16, height: u16, config: InspectorConfig) -> Result<Self, AppError> {
        Ok(Self::from_app(App::with_config(width, height, config)?))
    }

    fn from_app(app: App) -> Self {
        let panel = app.inspector.nodes().panel;
        let root = app.screen.dom.parent(panel).unwrap_or(panel);
        Self { app, root }
    }

    /// The screen root host widgets hang from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Insert a host widget.
    pub fn add_widget(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        self.app.screen.dom.insert_child(parent, data)
    }

    // ── Input simulation ─────────────────────────────────────────────

    fn send(&mut self, event: InputEvent) {
        self.app.handle_input(event);
    }

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.send(InputEvent::Key(KeyEvent::new(key, Modifiers::NONE)));
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.send(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Press the configured toggle key.
    pub fn toggle_inspector(&mut self) {
        let key = self.app.inspector.config().toggle_key;
        self.press_key(key);
    }

    fn mouse(&mut self, kind: MouseAction, x: u16, y: u16) {
        self.send(InputEvent::Mouse(MouseEvent::new(kind, x, y)));
    }

    /// Move to (x, y), then left button down and up there, as a terminal
    /// reports a click.
    pub fn click(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::Moved, x, y);
        self.mouse(MouseAction::Down(MouseBtn::Left), x, y);
        self.mouse(MouseAction::Up(MouseBtn::Left), x, y);
    }

    /// Move the pointer to (x, y) with no button held.
    pub fn hover(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::Moved, x, y);
    }

    /// Press at `from`, drag to `to`, and release there.
    pub fn drag(&mut self, from: (u16, u16), to: (u16, u16)) {
        self.mouse(MouseAction::Down(MouseBtn::Left), from.0, from.1);
        self.mouse(MouseAction::Drag(MouseBtn::Left), to.0, to.1);
        self.mouse(MouseAction::Up(MouseBtn::Left), to.0, to.1);
    }

    /// Scroll the wheel down by `rows` at (x, y).
    pub fn scroll_down(&mut self, x: u16, y: u16, rows: usize) {
        for _ in 0..rows {
            self.mouse(MouseAction::ScrollDown, x, y);
        }
    }

    /// Simulate a terminal resize to the given dimensions.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.send(InputEvent::Resize { width, height });
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    /// Live widgets currently carrying the hover marker.
    pub fn highlighted(&self) -> Vec<NodeId> {
        let marker = self.app.inspector.config().highlight_class.as_str();
        self.app.screen.dom.query_by_class(marker)
    }

    /// Render the whole screen and return it as text.
    pub fn screen_text(&mut self) -> String {
        self.app.render();
        compositor_to_string(&self.app.screen.compositor)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
