//! Read-only viewer for style text, with line numbers.

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::widget::traits::Widget;

/// Shows the selected widget's own declarations. Users cannot edit it.
#[derive(Debug, Clone, Default)]
pub struct StyleViewer {
    text: String,
    placeholder: String,
}

impl StyleViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text shown when empty (builder).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the whole document.
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

impl Widget for StyleViewer {
    fn widget_type(&self) -> &str {
        "TextArea"
    }

    fn render(&self, region: Region) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        if self.text.is_empty() {
            let shown: String = self.placeholder.chars().take(region.width as usize).collect();
            return vec![Strip::text(region.y, region.x, &shown, CellStyle::new().dim())];
        }

        let gutter = self.line_count().to_string().len();
        self.text
            .lines()
            .enumerate()
            .take(region.height as usize)
            .map(|(i, line)| {
                let mut strip = Strip::new(region.y + i as i32, region.x);
                strip.push_str(&format!("{:>gutter$} ", i + 1), CellStyle::new().dim());
                strip.push_str(line, CellStyle::new());
                strip.crop(region.x, region.right())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::snapshot::strips_to_string;

    #[test]
    fn placeholder_when_empty() {
        let viewer = StyleViewer::new().with_placeholder("No TCSS available");
        let strips = viewer.render(Region::new(0, 0, 30, 3));
        assert_eq!(strips_to_string(&strips, 30, 1), "No TCSS available");
        assert!(strips[0].cells[0].style.dim);
    }

    #[test]
    fn numbered_lines() {
        let mut viewer = StyleViewer::new();
        viewer.load_text("width: 33;\ncolor: red;");
        let strips = viewer.render(Region::new(0, 0, 30, 5));
        insta::assert_snapshot!(strips_to_string(&strips, 30, 2), @r"
        1 width: 33;
        2 color: red;
        ");
    }

    #[test]
    fn gutter_widens_past_nine_lines() {
        let mut viewer = StyleViewer::new();
        viewer.load_text((1..=10).map(|i| format!("a{i}: 1;")).collect::<Vec<_>>().join("\n"));
        let strips = viewer.render(Region::new(0, 0, 20, 10));
        assert_eq!(strips[0].plain_text(), " 1 a1: 1;");
        assert_eq!(strips[9].plain_text(), "10 a10: 1;");
    }

    #[test]
    fn clipped_to_region() {
        let mut viewer = StyleViewer::new();
        viewer.load_text("background: $accent 50%;\nheight: 1;");
        let strips = viewer.render(Region::new(5, 2, 8, 1));
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].plain_text(), "1 backgr");
        assert_eq!(strips[0].y, 2);
    }

    #[test]
    fn load_text_replaces() {
        let mut viewer = StyleViewer::new();
        viewer.load_text("a: 1;");
        viewer.load_text("");
        assert_eq!(viewer.text(), "");
        assert_eq!(viewer.line_count(), 0);
    }
}
