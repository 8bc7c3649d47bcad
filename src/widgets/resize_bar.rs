//! ResizeBar: a draggable edge that resizes one container along one axis.
//!
//! The bar is idle until pressed. Pressing records a [`DragSession`] and
//! captures the pointer for the bar's node; while the capture is held, every
//! pointer move resizes the container to
//! `clamp(start_extent - (pointer - origin), min, max)` on the bar's axis.
//! Releasing drops the session and the capture.

use crate::dom::node::NodeId;
use crate::geometry::{clamp, Axis, Offset, Region, Size};
use crate::render::strip::{CellStyle, Strip};
use crate::screen::Screen;
use crate::widget::traits::Widget;

/// Class carried by a bar's node while it is pressed.
pub const PRESSED_CLASS: &str = "pressed";

/// Distance kept between a dragged panel and the far screen edge.
pub const DEFAULT_MARGIN: i32 = 10;

/// State recorded on press and dropped on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Pointer position at press, in screen cells.
    pub origin: Offset,
    /// Container size at press.
    pub start_size: Size,
}

#[derive(Debug, Clone)]
pub struct ResizeBar {
    axis: Axis,
    node: NodeId,
    container: NodeId,
    min: i32,
    max: i32,
    margin: i32,
    drag: Option<DragSession>,
}

impl ResizeBar {
    /// A bar living at `node` that resizes `container`.
    ///
    /// Horizontal bars default to widths in `[20, 100]`, vertical bars to
    /// heights in `[5, 50]`. The maximum is recomputed on every press.
    pub fn new(axis: Axis, node: NodeId, container: NodeId) -> Self {
        let (min, max) = match axis {
            Axis::Horizontal => (20, 100),
            Axis::Vertical => (5, 50),
        };
        Self {
            axis,
            node,
            container,
            min,
            max,
            margin: DEFAULT_MARGIN,
            drag: None,
        }
    }

    /// Override the size bounds (builder).
    pub fn with_bounds(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Override the screen-edge margin (builder).
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    /// The maximum as of the last press.
    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_pressed(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag at `position`.
    pub fn press(&mut self, screen: &mut Screen, position: Offset) {
        if !screen.dom.contains(self.container) {
            tracing::debug!(axis = ?self.axis, "resize bar container is gone; ignoring press");
            return;
        }
        self.max = self.axis.extent(screen.size()) - self.margin;
        let session = DragSession {
            origin: position,
            start_size: screen.dom.size(self.container),
        };
        tracing::debug!(axis = ?self.axis, ?session, max = self.max, "resize drag started");
        self.drag = Some(session);
        screen.dom.add_class(self.node, PRESSED_CLASS);
        screen.capture.capture(self.node);
    }

    /// Resize the container for a pointer now at `position`.
    ///
    /// Does nothing unless this bar holds the pointer capture. Returns the new
    /// extent when the container was resized.
    pub fn drag_to(&mut self, screen: &mut Screen, position: Offset) -> Option<i32> {
        if !screen.capture.is_held_by(self.node) {
            return None;
        }
        let session = self.drag?;
        let delta = self.axis.component(position - session.origin);
        let extent = clamp(self.axis.extent(session.start_size) - delta, self.min, self.max);
        screen
            .dom
            .set_extent(self.container, self.axis, extent)
            .then_some(extent)
    }

    /// End the drag. Safe to call without a prior press.
    pub fn release(&mut self, screen: &mut Screen) {
        screen.dom.remove_class(self.node, PRESSED_CLASS);
        screen.capture.release(self.node);
        if self.drag.take().is_some() {
            tracing::debug!(axis = ?self.axis, "resize drag ended");
        }
    }
}

impl Widget for ResizeBar {
    fn widget_type(&self) -> &str {
        match self.axis {
            Axis::Horizontal => "HorizontalResizeBar",
            Axis::Vertical => "VerticalResizeBar",
        }
    }

    fn default_css(&self) -> &str {
        match self.axis {
            Axis::Horizontal => {
                "HorizontalResizeBar { width: 1; height: 1fr; border-left: outer $border-blurred; }\n\
                 HorizontalResizeBar.pressed { border-left: outer $primary-lighten-1; }"
            }
            Axis::Vertical => {
                "VerticalResizeBar { height: 1; width: 1fr; border-top: outer $border-blurred; }\n\
                 VerticalResizeBar.pressed { border-top: outer $primary-lighten-1; }"
            }
        }
    }

    fn render(&self, region: Region) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let color = if self.is_pressed() {
            "$primary-lighten-1"
        } else {
            "$border-blurred"
        };
        let style = CellStyle::new().fg(color);
        match self.axis {
            Axis::Horizontal => (region.y..region.bottom())
                .map(|y| Strip::text(y, region.x, "▌", style.clone()))
                .collect(),
            Axis::Vertical => {
                let line = "▀".repeat(region.width as usize);
                vec![Strip::text(region.y, region.x, &line, style)]
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
