//! Tabs: a row of tab headers with one active tab.

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::widget::traits::Widget;

/// Tab header row. Each header renders as ` label ` and headers are packed
/// left to right with no gap.
#[derive(Debug, Clone)]
pub struct Tabs {
    labels: Vec<String>,
    active: usize,
}

impl Tabs {
    /// Headers in display order; the first is active.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self { labels: labels.into_iter().map(Into::into).collect(), active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Make tab `index` active. Out-of-range indexes are ignored.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.labels.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// The header under column `x`, relative to the header row.
    pub fn header_at(&self, x: i32) -> Option<usize> {
        if x < 0 {
            return None;
        }
        let mut start = 0;
        for (index, label) in self.labels.iter().enumerate() {
            let end = start + label.chars().count() as i32 + 2;
            if x < end {
                return Some(index);
            }
            start = end;
        }
        None
    }
}

impl Widget for Tabs {
    fn widget_type(&self) -> &str {
        "Tabs"
    }

    fn render(&self, region: Region) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let mut strip = Strip::new(region.y, region.x);
        for (index, label) in self.labels.iter().enumerate() {
            let style = if index == self.active {
                CellStyle::new().bold().fg("$accent")
            } else {
                CellStyle::new().dim()
            };
            strip.push_str(&format!(" {label} "), style);
        }
        vec![strip.crop(region.x, region.right())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Tabs {
        Tabs::new(["CSS", "ID & Classes"])
    }

    #[test]
    fn first_tab_active() {
        assert_eq!(tabs().active(), 0);
        assert_eq!(tabs().labels().len(), 2);
    }

    #[test]
    fn activate_switches_once() {
        let mut t = tabs();
        assert!(t.activate(1));
        assert!(!t.activate(1));
        assert!(!t.activate(7));
        assert_eq!(t.active(), 1);
    }

    #[test]
    fn header_hit_testing() {
        let t = tabs();
        // " CSS " spans 0..5, " ID & Classes " spans 5..19.
        assert_eq!(t.header_at(0), Some(0));
        assert_eq!(t.header_at(4), Some(0));
        assert_eq!(t.header_at(5), Some(1));
        assert_eq!(t.header_at(18), Some(1));
        assert_eq!(t.header_at(19), None);
        assert_eq!(t.header_at(-1), None);
    }

    #[test]
    fn render_highlights_active() {
        let mut t = tabs();
        t.activate(1);
        let strips = t.render(Region::new(0, 0, 40, 1));
        assert_eq!(strips[0].plain_text(), " CSS  ID & Classes ");
        assert!(strips[0].cells[1].style.dim);
        assert!(strips[0].cells[6].style.bold);
    }
}
