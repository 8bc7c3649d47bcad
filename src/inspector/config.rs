//! Inspector configuration.

use crate::event::input::Key;

/// Tunables for an [`Inspector`](super::Inspector).
///
/// Defaults dock a quarter-screen panel on the right whose tab area takes half
/// the screen height, toggled with F12.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorConfig {
    /// Panel width on first show, as a fraction of the screen width.
    pub default_width_fraction: f32,
    /// Tab area height on first show, as a fraction of the screen height.
    pub tab_height_fraction: f32,
    /// `(min, max)` panel width while dragging the horizontal bar.
    pub width_bounds: (i32, i32),
    /// `(min, max)` tab area height while dragging the vertical bar.
    pub height_bounds: (i32, i32),
    /// Cells kept free between a dragged edge and the far screen edge.
    pub margin: i32,
    /// Class marking the hovered live widget.
    pub highlight_class: String,
    /// Class carried by the panel while hidden.
    pub hidden_class: String,
    /// Label of the mirror tree's root row.
    pub root_label: String,
    pub toggle_key: Key,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            default_width_fraction: 0.25,
            tab_height_fraction: 0.5,
            width_bounds: (20, 100),
            height_bounds: (5, 50),
            margin: 10,
            highlight_class: "-highlight".to_owned(),
            hidden_class: "-hide".to_owned(),
            root_label: "Application".to_owned(),
            toggle_key: Key::F(12),
        }
    }
}

impl InspectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_width_fraction(mut self, fraction: f32) -> Self {
        self.default_width_fraction = fraction;
        self
    }

    pub fn with_tab_height_fraction(mut self, fraction: f32) -> Self {
        self.tab_height_fraction = fraction;
        self
    }

    pub fn with_width_bounds(mut self, min: i32, max: i32) -> Self {
        self.width_bounds = (min, max);
        self
    }

    pub fn with_height_bounds(mut self, min: i32, max: i32) -> Self {
        self.height_bounds = (min, max);
        self
    }

    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn with_toggle_key(mut self, key: Key) -> Self {
        self.toggle_key = key;
        self
    }

    /// First-show panel width for a screen `screen_width` cells wide.
    pub fn default_width(&self, screen_width: i32) -> i32 {
        (screen_width as f32 * self.default_width_fraction).round() as i32
    }

    /// First-show tab area height for a screen `screen_height` cells high.
    pub fn default_tab_height(&self, screen_height: i32) -> i32 {
        (screen_height as f32 * self.tab_height_fraction).round() as i32
    }

    /// The rule installed once per application for the hover marker.
    pub fn highlight_rule(&self) -> String {
        format!(".{} {{ background: $accent 50% !important; }}", self.highlight_class)
    }
}
