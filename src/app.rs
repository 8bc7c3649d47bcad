//! App struct: input handling, event draining, rendering.
//!
//! [`App`] ties together the screen, the inspector, key bindings, and the event
//! queue. The `new_headless` constructor allows testing without a real
//! terminal.

use std::io;

use crate::css::parser::ParseError;
use crate::dom::node::{NodeData, NodeId};
use crate::event::binding::{BindingAction, KeyBindingRegistry};
use crate::event::handler::EventQueue;
use crate::event::input::InputEvent;
use crate::inspector::{Inspector, InspectorConfig};
use crate::screen::Screen;

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("inspector styles failed to parse: {0}")]
    Style(#[from] ParseError),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application struct.
///
/// The screen root is a `Screen` node; host widgets go under
/// [`App::root`] next to the inspector panel.
pub struct App {
    /// The screen (DOM, styles, capture, focus, compositor).
    pub screen: Screen,
    pub inspector: Inspector,
    /// Key binding registry.
    pub bindings: KeyBindingRegistry,
    /// Pending inspector events, drained by [`App::process`].
    pub queue: EventQueue,
    /// Whether the app is still running.
    running: bool,
}

impl App {
    /// Create an app sized to the current terminal.
    pub fn new(config: InspectorConfig) -> Result<Self, AppError> {
        let (width, height) = crossterm::terminal::size()?;
        Self::with_screen(Screen::new(width, height), config)
    }

    /// Create a headless app for testing with the default configuration.
    pub fn new_headless(width: u16, height: u16) -> Result<Self, AppError> {
        Self::with_screen(Screen::new(width, height), InspectorConfig::default())
    }

    /// Create a headless app with a custom configuration.
    pub fn with_config(width: u16, height: u16, config: InspectorConfig) -> Result<Self, AppError> {
        Self::with_screen(Screen::new(width, height), config)
    }

    fn with_screen(mut screen: Screen, config: InspectorConfig) -> Result<Self, AppError> {
        let size = screen.size();
        if screen.dom.root().is_none() {
            screen
                .dom
                .insert(NodeData::new("Screen").with_size(size.width, size.height));
        }
        let bindings = KeyBindingRegistry::with_defaults(config.toggle_key);
        let inspector = Inspector::mount(&mut screen, config)?;
        Ok(Self {
            screen,
            inspector,
            bindings,
            queue: EventQueue::new(),
            running: true,
        })
    }

    /// The screen root node.
    pub fn root(&self) -> Option<NodeId> {
        self.screen.dom.root()
    }

    /// Handle one input event.
    ///
    /// Global bindings win over the focused control. Toggling drains the queue
    /// first so earlier events see the panel in the state they were produced
    /// for. Everything else is routed through the inspector and dispatched
    /// before returning, so the next input is routed against the capture and
    /// cursor this one left behind.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => match self.bindings.resolve(&key) {
                Some(BindingAction::Quit) => self.running = false,
                Some(BindingAction::ToggleInspector) => {
                    self.process();
                    self.inspector.toggle(&mut self.screen);
                }
                None => {
                    let events = self.inspector.route_key(&mut self.screen, &key);
                    self.queue.extend(events);
                    self.process();
                }
            },
            InputEvent::Mouse(mouse) => {
                let events = self.inspector.route_mouse(&mut self.screen, &mouse);
                self.queue.extend(events);
                self.process();
            }
            InputEvent::Resize { width, height } => {
                self.screen.resize(width, height);
            }
        }
    }

    /// Drain the queue in arrival order. Follow-up events are handled in the
    /// same call, after everything already queued.
    pub fn process(&mut self) {
        while let Some(event) = self.queue.pop() {
            tracing::trace!(event = event.name(), "dispatching");
            let follow_ups = self.inspector.handle(&mut self.screen, event);
            self.queue.extend(follow_ups);
        }
    }

    /// Redraw the compositor from scratch.
    pub fn render(&mut self) {
        self.screen.compositor.clear();
        self.inspector.render(&mut self.screen);
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.running = false;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
