//! Snapshot rendering helpers.
//!
//! Functions for converting rendered widget output (strips, compositor screens)
//! into plain-text strings suitable for snapshot testing and assertions.

use crate::geometry::Region;
use crate::render::compositor::Compositor;
use crate::render::strip::Strip;
use crate::widget::traits::Widget;

/// Render a widget into a `width` x `height` region at the origin and return
/// the text, one line per row with trailing spaces trimmed.
pub fn render_to_string(widget: &dyn Widget, width: i32, height: i32) -> String {
    let strips = widget.render(Region::new(0, 0, width, height));
    strips_to_string(&strips, width, height)
}

/// Convert raw strips to a plain text string.
///
/// Builds a `width` x `height` grid of spaces, then overlays each strip's cells
/// at their (x, y) positions. Each row is right-trimmed and rows are joined
/// with `'\n'`.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }
    let mut grid = vec![vec![' '; width as usize]; height as usize];
    for strip in strips {
        if strip.y < 0 || strip.y >= height {
            continue;
        }
        let row = &mut grid[strip.y as usize];
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if (0..width).contains(&x) {
                row[x as usize] = cell.ch;
            }
        }
    }
    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a full compositor screen to a plain text string, in the same
/// format as [`strips_to_string`].
pub fn compositor_to_string(compositor: &Compositor) -> String {
    (0..compositor.height)
        .map(|y| compositor.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}
