//! Core geometry types: Offset, Size, Region, Axis.
//!
//! Terminal-cell coordinates used for pointer positions, widget sizes, and the
//! inspector's panel layout.

use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// clamp
// ---------------------------------------------------------------------------

/// Clamp `value` into `[minimum, maximum]`.
///
/// Unlike [`i32::clamp`], the bounds are swapped when `minimum > maximum`
/// instead of panicking. A resize bar whose computed maximum falls below its
/// minimum (tiny terminal) still produces a value inside the two bounds.
#[inline]
pub fn clamp(value: i32, minimum: i32, maximum: i32) -> i32 {
    let (lo, hi) = if minimum > maximum {
        (maximum, minimum)
    } else {
        (minimum, maximum)
    };
    value.max(lo).min(hi)
}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D position or displacement in terminal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in terminal cells (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular region in terminal cells defined by position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the region has no area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point lies inside this region.
    #[inline]
    pub const fn contains(self, point: Offset) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Split horizontally at `offset` cells from the top edge.
    ///
    /// Returns `(top, bottom)`. The offset is clamped to `[0, height]`.
    #[inline]
    pub fn split_horizontal(self, offset: i32) -> (Region, Region) {
        let at = offset.clamp(0, self.height.max(0));
        let top = Region { x: self.x, y: self.y, width: self.width, height: at };
        let bottom = Region {
            x: self.x,
            y: self.y + at,
            width: self.width,
            height: self.height - at,
        };
        (top, bottom)
    }

    /// Split vertically at `offset` cells from the left edge.
    ///
    /// Returns `(left, right)`. The offset is clamped to `[0, width]`.
    #[inline]
    pub fn split_vertical(self, offset: i32) -> (Region, Region) {
        let at = offset.clamp(0, self.width.max(0));
        let left = Region { x: self.x, y: self.y, width: at, height: self.height };
        let right = Region {
            x: self.x + at,
            y: self.y,
            width: self.width - at,
            height: self.height,
        };
        (left, right)
    }

    /// The overlap of two regions, or an empty region at `self`'s origin.
    pub fn intersection(self, other: Region) -> Region {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Region { x: self.x, y: self.y, width: 0, height: 0 };
        }
        Region { x, y, width: right - x, height: bottom - y }
    }
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// One of the two screen axes. A horizontal resize bar changes widths; a
/// vertical one changes heights.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The component of `size` along this axis.
    #[inline]
    pub const fn extent(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// The component of `offset` along this axis.
    #[inline]
    pub const fn component(self, offset: Offset) -> i32 {
        match self {
            Axis::Horizontal => offset.x,
            Axis::Vertical => offset.y,
        }
    }

    /// Return `size` with its extent along this axis replaced by `extent`.
    #[inline]
    pub const fn with_extent(self, size: Size, extent: i32) -> Size {
        match self {
            Axis::Horizontal => Size { width: extent, height: size.height },
            Axis::Vertical => Size { width: size.width, height: extent },
        }
    }

    /// The CSS property this axis controls.
    pub const fn property(self) -> &'static str {
        match self {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
