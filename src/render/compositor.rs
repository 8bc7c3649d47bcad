//! Screen buffer assembly.
//!
//! The `Compositor` holds a grid of [`StyledCell`]s covering the terminal.
//! Widget strips are placed into it clipped to the widget's region, so a widget
//! can never draw outside the area it was given.

use super::strip::{Strip, StyledCell};
use crate::geometry::Region;

/// A full-screen cell buffer.
#[derive(Debug, Clone)]
pub struct Compositor {
    /// `screen[y][x]` is the cell at column x, row y.
    screen: Vec<Vec<StyledCell>>,
    pub width: u16,
    pub height: u16,
}

impl Compositor {
    /// A blank buffer of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Self::blank_screen(width, height),
            width,
            height,
        }
    }

    /// Resize and blank the buffer.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.screen = Self::blank_screen(width, height);
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        for row in &mut self.screen {
            row.fill(StyledCell::default());
        }
    }

    /// The whole screen as a region.
    pub fn region(&self) -> Region {
        Region::new(0, 0, i32::from(self.width), i32::from(self.height))
    }

    /// Write `strips` into the buffer, dropping cells outside `clip` or the
    /// screen.
    pub fn place_strips(&mut self, strips: &[Strip], clip: Region) {
        let clip = clip.intersection(self.region());
        if clip.is_empty() {
            return;
        }
        for strip in strips {
            if strip.y < clip.y || strip.y >= clip.bottom() {
                continue;
            }
            let row = &mut self.screen[strip.y as usize];
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x >= clip.x && x < clip.right() {
                    row[x as usize] = cell.clone();
                }
            }
        }
    }

    /// The cell at (x, y), if in bounds.
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.screen.get(usize::from(y))?.get(usize::from(x))
    }

    /// Characters of row `y`, right-trimmed.
    pub fn row_text(&self, y: u16) -> String {
        self.screen
            .get(usize::from(y))
            .map(|row| {
                let text: String = row.iter().map(|cell| cell.ch).collect();
                text.trim_end().to_owned()
            })
            .unwrap_or_default()
    }

    fn blank_screen(width: u16, height: u16) -> Vec<Vec<StyledCell>> {
        vec![vec![StyledCell::default(); usize::from(width)]; usize::from(height)]
    }
}

// ===========================================================================
// Tests
// ===========================================================================
