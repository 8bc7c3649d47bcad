//! Terminal input types, converted from crossterm.
//!
//! The rest of the crate only sees [`InputEvent`]; crossterm types stop here.

use std::ops::BitOr;

use crossterm::event as ct;

use crate::geometry::Offset;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// The character this press would insert into a text field, if any.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            Key::Char(c) if !self.modifiers.contains(Modifiers::CTRL) && !c.is_control() => Some(c),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseBtn),
    Up(MouseBtn),
    Drag(MouseBtn),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A mouse event at a screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseAction, x: u16, y: u16) -> Self {
        Self { kind, x, y, modifiers: Modifiers::NONE }
    }

    /// The pointer position as a screen offset.
    pub fn position(&self) -> Offset {
        Offset::new(i32::from(self.x), i32::from(self.y))
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    /// Convert a crossterm event.
    ///
    /// Key releases, focus changes, pastes, and keys without a [`Key`]
    /// counterpart yield `None`.
    pub fn from_crossterm(event: ct::Event) -> Option<Self> {
        match event {
            ct::Event::Key(key) if key.kind != ct::KeyEventKind::Release => {
                convert_key(key).map(InputEvent::Key)
            }
            ct::Event::Mouse(mouse) => Some(InputEvent::Mouse(MouseEvent {
                kind: convert_mouse_kind(mouse.kind)?,
                x: mouse.column,
                y: mouse.row,
                modifiers: convert_modifiers(mouse.modifiers),
            })),
            ct::Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
            _ => None,
        }
    }
}

fn convert_modifiers(m: ct::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(ct::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(ct::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(ct::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

fn convert_key(key: ct::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Esc => Key::Escape,
        ct::KeyCode::Tab => Key::Tab,
        ct::KeyCode::BackTab => Key::BackTab,
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Delete => Key::Delete,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Home => Key::Home,
        ct::KeyCode::End => Key::End,
        ct::KeyCode::PageUp => Key::PageUp,
        ct::KeyCode::PageDown => Key::PageDown,
        ct::KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(KeyEvent::new(code, convert_modifiers(key.modifiers)))
}

fn convert_button(button: ct::MouseButton) -> MouseBtn {
    match button {
        ct::MouseButton::Left => MouseBtn::Left,
        ct::MouseButton::Right => MouseBtn::Right,
        ct::MouseButton::Middle => MouseBtn::Middle,
    }
}

fn convert_mouse_kind(kind: ct::MouseEventKind) -> Option<MouseAction> {
    Some(match kind {
        ct::MouseEventKind::Down(b) => MouseAction::Down(convert_button(b)),
        ct::MouseEventKind::Up(b) => MouseAction::Up(convert_button(b)),
        ct::MouseEventKind::Drag(b) => MouseAction::Drag(convert_button(b)),
        ct::MouseEventKind::Moved => MouseAction::Moved,
        ct::MouseEventKind::ScrollUp => MouseAction::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseAction::ScrollDown,
        _ => return None,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
