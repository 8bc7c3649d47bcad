//! Strip: a horizontal line of styled terminal cells.
//!
//! Widgets produce `Vec<Strip>` from [`Widget::render`](crate::widget::Widget::render);
//! the [`Compositor`](super::Compositor) places them into a screen buffer.

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are names (`"cyan"`) or `$variable` references resolved by the host
/// theme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color (builder).
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color (builder).
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// One character with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A space with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank_styled(CellStyle::default())
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal run of cells at absolute row `y`, starting at column
/// `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub y: i32,
    pub x_offset: i32,
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// An empty strip at the given row and column.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self { y, x_offset, cells: Vec::new() }
    }

    /// A strip holding `text` in one style.
    pub fn text(y: i32, x_offset: i32, text: &str, style: CellStyle) -> Self {
        let mut strip = Self::new(y, x_offset);
        strip.push_str(text, style);
        strip
    }

    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        self.cells
            .extend(text.chars().map(|ch| StyledCell::new(ch, style.clone())));
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// The rightmost column (exclusive).
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// Pad with styled spaces or truncate to exactly `width` cells.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, StyledCell::blank_styled(style));
        } else {
            self.cells.truncate(w);
        }
    }

    /// Keep only the cells whose absolute column falls in `[x_start, x_end)`.
    pub fn crop(&self, x_start: i32, x_end: i32) -> Strip {
        let mut result = Strip::new(self.y, x_start);
        for (i, cell) in self.cells.iter().enumerate() {
            let x = self.x_offset + i as i32;
            if x >= x_start && x < x_end {
                if result.cells.is_empty() {
                    result.x_offset = x;
                }
                result.cells.push(cell.clone());
            }
        }
        result
    }

    /// The characters of this strip as a string.
    pub fn plain_text(&self) -> String {
        self.cells.iter().map(|cell| cell.ch).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
