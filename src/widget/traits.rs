//! The `Widget` trait.
//!
//! Every inspector control knows its type name, the default rules it wants in
//! the global style registry, and how to render itself into strips within a
//! region.

use crate::geometry::Region;
use crate::render::strip::Strip;

/// Core trait implemented by the inspector's widgets.
///
/// Object-safe: the panel keeps its children as concrete fields but renders
/// them through `&dyn Widget`.
pub trait Widget {
    /// Type name, also used as the registry key for [`Widget::default_css`].
    fn widget_type(&self) -> &str;

    /// Default rules installed once into the screen's style registry.
    fn default_css(&self) -> &str {
        ""
    }

    /// Render into strips positioned inside `region` (absolute coordinates).
    fn render(&self, region: Region) -> Vec<Strip>;

    /// Whether this widget takes keyboard focus.
    fn can_focus(&self) -> bool {
        false
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;
    use crate::testing::snapshot::strips_to_string;

    struct TestLabel {
        text: String,
    }

    impl Widget for TestLabel {
        fn widget_type(&self) -> &str {
            "Label"
        }

        fn render(&self, region: Region) -> Vec<Strip> {
            if region.is_empty() {
                return Vec::new();
            }
            let text: String = self.text.chars().take(region.width as usize).collect();
            vec![Strip::text(region.y, region.x, &text, CellStyle::new())]
        }
    }

    #[test]
    fn defaults() {
        let label = TestLabel { text: "hi".into() };
        assert_eq!(label.widget_type(), "Label");
        assert_eq!(label.default_css(), "");
        assert!(!label.can_focus());
    }

    #[test]
    fn render_through_trait_object() {
        let label = TestLabel { text: "Hello, world".into() };
        let widget: &dyn Widget = &label;
        let strips = widget.render(Region::new(0, 0, 5, 1));
        assert_eq!(strips_to_string(&strips, 5, 1), "Hello");
    }

    #[test]
    fn render_empty_region() {
        let label = TestLabel { text: "x".into() };
        assert!(label.render(Region::new(0, 0, 0, 3)).is_empty());
    }
}
