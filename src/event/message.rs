//! Inspector events.
//!
//! Every reaction the inspector performs starts from one [`InspectorEvent`].
//! Raw terminal input is translated into these by the inspector's mouse and
//! key routers; tests and hosts may also push them directly.

use crate::geometry::Offset;

// ---------------------------------------------------------------------------
// Event sources
// ---------------------------------------------------------------------------

/// A pointer-sensitive control inside the inspector panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Bar on the panel's left edge; resizes the panel's width.
    HorizontalBar,
    /// Bar above the tab area; resizes the tab area's height.
    VerticalBar,
    /// The mirror tree viewport.
    Tree,
}

impl Control {
    /// Whether this control is one of the resize bars.
    pub fn is_bar(self) -> bool {
        matches!(self, Control::HorizontalBar | Control::VerticalBar)
    }
}

/// One of the editable text fields of the "ID & Classes" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Classes,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Classes => "classes",
        }
    }
}

// ---------------------------------------------------------------------------
// InspectorEvent
// ---------------------------------------------------------------------------

/// Tagged union of everything the inspector reacts to.
///
/// Positions are absolute screen cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorEvent {
    PointerDown { control: Control, position: Offset },
    PointerMove { control: Control, position: Offset },
    PointerUp { control: Control },
    PointerLeave { control: Control },
    /// The mirror tree cursor moved to `line`.
    NodeHighlighted { line: usize },
    /// A field's value changed through user input.
    FieldChanged { field: Field, value: String },
    /// The panel became visible.
    Shown,
    /// The panel became hidden.
    Hidden,
}

impl InspectorEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            InspectorEvent::PointerDown { .. } => "PointerDown",
            InspectorEvent::PointerMove { .. } => "PointerMove",
            InspectorEvent::PointerUp { .. } => "PointerUp",
            InspectorEvent::PointerLeave { .. } => "PointerLeave",
            InspectorEvent::NodeHighlighted { .. } => "NodeHighlighted",
            InspectorEvent::FieldChanged { .. } => "FieldChanged",
            InspectorEvent::Shown => "Shown",
            InspectorEvent::Hidden => "Hidden",
        }
    }

    /// The control a pointer event is addressed to, if this is one.
    pub fn pointer_control(&self) -> Option<Control> {
        match *self {
            InspectorEvent::PointerDown { control, .. }
            | InspectorEvent::PointerMove { control, .. }
            | InspectorEvent::PointerUp { control }
            | InspectorEvent::PointerLeave { control } => Some(control),
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
