//! TextField: a single-line editable input with validation.
//!
//! The cursor position is a byte offset into the value; every cursor
//! operation stays on char boundaries. Validators run whenever the value
//! changes, whether through editing or [`TextField::set_value`].

use crate::event::input::{Key, KeyEvent};
use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::validation::{ValidationResult, Validator};
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// TextField
// ---------------------------------------------------------------------------

/// Editable text field.
///
/// Editing methods report whether the value changed; the inspector uses that
/// to decide when to emit a field-changed event. [`TextField::set_value`]
/// never counts as a user change.
pub struct TextField {
    value: String,
    placeholder: String,
    cursor: usize,
    validators: Vec<Box<dyn Validator>>,
    valid_empty: bool,
    validation: ValidationResult,
    focused: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            cursor: 0,
            validators: Vec::new(),
            valid_empty: false,
            validation: ValidationResult::Success,
            focused: false,
        }
    }

    /// Set the placeholder text (builder).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Add a validator (builder).
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self.revalidate();
        self
    }

    /// Accept an empty value without running validators (builder).
    pub fn valid_empty(mut self, valid_empty: bool) -> Self {
        self.valid_empty = valid_empty;
        self.revalidate();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor byte offset.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the value programmatically, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
        self.revalidate();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    // -- validation -------------------------------------------------------

    /// Run the validators against an arbitrary value.
    pub fn check(&self, value: &str) -> ValidationResult {
        if value.is_empty() && self.valid_empty {
            return ValidationResult::Success;
        }
        self.validators
            .iter()
            .map(|validator| validator.validate(value))
            .find(|result| !result.is_valid())
            .unwrap_or(ValidationResult::Success)
    }

    /// Result of validating the current value.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    fn revalidate(&mut self) {
        self.validation = self.check(&self.value);
    }

    // -- editing ----------------------------------------------------------

    /// Apply a key press. Returns `true` when the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(ch) = key.printable() {
            self.insert_char(ch);
            return true;
        }
        match key.code {
            Key::Backspace => self.delete_char(),
            Key::Delete => self.delete_forward(),
            Key::Left => {
                self.move_cursor_left();
                false
            }
            Key::Right => {
                self.move_cursor_right();
                false
            }
            Key::Home => {
                self.cursor = 0;
                false
            }
            Key::End => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        self.revalidate();
    }

    /// Delete the character before the cursor.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_char_boundary();
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
        self.revalidate();
        true
    }

    /// Delete the character after the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        let next = self.next_char_boundary();
        self.value.drain(self.cursor..next);
        self.revalidate();
        true
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_char_boundary();
        }
    }

    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }

    fn render_value(&self, region: Region) -> Strip {
        let width = region.width as usize;
        let mut strip = Strip::new(region.y, region.x);

        if self.value.is_empty() {
            if self.focused {
                strip.push(' ', CellStyle::new().reverse());
            }
            let room = width.saturating_sub(strip.cells.len());
            let shown: String = self.placeholder.chars().take(room).collect();
            strip.push_str(&shown, CellStyle::new().dim());
            strip.fill(region.width, CellStyle::new());
            return strip;
        }

        // Keep the cursor cell inside the visible window.
        let cursor_col = self.value[..self.cursor].chars().count();
        let start = (cursor_col + 1).saturating_sub(width);
        for (col, ch) in self.value.chars().enumerate().skip(start).take(width) {
            let style = if self.focused && col == cursor_col {
                CellStyle::new().reverse()
            } else {
                CellStyle::new()
            };
            strip.push(ch, style);
        }
        if self.focused && cursor_col == self.value.chars().count() && strip.cells.len() < width {
            strip.push(' ', CellStyle::new().reverse());
        }
        strip.fill(region.width, CellStyle::new());
        strip
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextField {
    fn widget_type(&self) -> &str {
        "Input"
    }

    fn default_css(&self) -> &str {
        "Input { height: 1; width: 1fr; }\nInput.-invalid { color: $error; }"
    }

    fn can_focus(&self) -> bool {
        true
    }

    /// Row 0 holds the value; row 1, when present, the validation failure.
    fn render(&self, region: Region) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let mut strips = vec![self.render_value(region)];
        if let (true, Some(reason)) = (region.height > 1, self.validation.failure_description()) {
            let text: String = reason.chars().take(region.width as usize).collect();
            strips.push(Strip::text(region.y + 1, region.x, &text, CellStyle::new().fg("red")));
        }
        strips
    }
}

// ===========================================================================
// Tests
// ===========================================================================
