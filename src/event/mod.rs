//! Event system: terminal input, inspector events, key bindings, capture.

pub mod binding;
pub mod handler;
pub mod input;
pub mod message;

pub use binding::{BindingAction, KeyBindingRegistry};
pub use handler::{EventQueue, PointerCapture};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
pub use message::{Control, Field, InspectorEvent};
