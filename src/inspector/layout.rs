//! Panel geometry: where each inspector control sits on screen.
//!
//! ```text
//!  ┌ panel (right-docked) ──────────┐
//!  │▌ tree                          │
//!  │▌                               │
//!  │▌▀▀▀▀▀▀▀▀ vertical bar ▀▀▀▀▀▀▀▀▀│
//!  │▌ CSS  ID & Classes             │
//!  │▌ tab body                      │
//!  └────────────────────────────────┘
//! ```

use crate::geometry::{Offset, Region, Size};

/// Rows taken by one text field: the value and its error line.
pub const FIELD_HEIGHT: i32 = 2;

/// What lies under a screen position inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelArea {
    HorizontalBar,
    Tree,
    VerticalBar,
    TabHeaders,
    TabBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    pub panel: Region,
    pub horizontal_bar: Region,
    pub tree: Region,
    pub tab_area: Region,
    pub vertical_bar: Region,
    pub tab_headers: Region,
    pub tab_body: Region,
}

impl PanelLayout {
    /// Lay out a panel `width` cells wide whose tab area is `tab_height`
    /// rows, on a screen of `screen` cells. Both are clamped to the screen.
    pub fn compute(screen: Size, width: i32, tab_height: i32) -> Self {
        let width = width.clamp(0, screen.width.max(0));
        let panel = Region::new(screen.width - width, 0, width, screen.height.max(0));
        let (horizontal_bar, content) = panel.split_vertical(1);
        let tab_height = tab_height.clamp(0, content.height);
        let (tree, tab_area) = content.split_horizontal(content.height - tab_height);
        let (vertical_bar, rest) = tab_area.split_horizontal(1);
        let (tab_headers, tab_body) = rest.split_horizontal(1);
        Self {
            panel,
            horizontal_bar,
            tree,
            tab_area,
            vertical_bar,
            tab_headers,
            tab_body,
        }
    }

    /// The first text field of the "ID & Classes" tab.
    pub fn id_field(&self) -> Region {
        self.tab_body.split_horizontal(FIELD_HEIGHT).0
    }

    /// The second text field of the "ID & Classes" tab.
    pub fn classes_field(&self) -> Region {
        let (_, below) = self.tab_body.split_horizontal(FIELD_HEIGHT);
        below.split_horizontal(FIELD_HEIGHT).0
    }

    /// Hit-test a screen position.
    pub fn hit(&self, point: Offset) -> Option<PanelArea> {
        [
            (self.horizontal_bar, PanelArea::HorizontalBar),
            (self.tree, PanelArea::Tree),
            (self.vertical_bar, PanelArea::VerticalBar),
            (self.tab_headers, PanelArea::TabHeaders),
            (self.tab_body, PanelArea::TabBody),
        ]
        .into_iter()
        .find(|(region, _)| region.contains(point))
        .map(|(_, area)| area)
    }
}
