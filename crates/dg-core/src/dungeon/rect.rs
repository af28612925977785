//! Rectangles on the dungeon grid
//!
//! A `Rect` is the geometry of a region: an origin plus a size, in absolute
//! grid coordinates.


/// An axis-aligned rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left x coordinate
    pub x: usize,
    /// Top y coordinate
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if the rectangle has no cells
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if an absolute cell lies inside
    pub const fn contains_point(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle contains another
    pub const fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Check if this rectangle shares any cell with another
    pub const fn intersects(&self, other: &Rect) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || self.right() <= other.x
            || other.right() <= self.x
            || self.bottom() <= other.y
            || other.bottom() <= self.y)
    }

    /// Calculate the overlap of two rectangles (empty if they are disjoint)
    pub fn intersection(&self, other: &Rect) -> Rect {
        if !self.intersects(other) {
            return Rect::new(self.x, self.y, 0, 0);
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Rect::new(
            x,
            y,
            self.right().min(other.right()) - x,
            self.bottom().min(other.bottom()) - y,
        )
    }

    /// Shrink by `margin` on every side, if anything is left
    pub fn inset(&self, margin: usize) -> Option<Rect> {
        if self.width <= 2 * margin || self.height <= 2 * margin {
            return None;
        }
        Some(Rect::new(
            self.x + margin,
            self.y + margin,
            self.width - 2 * margin,
            self.height - 2 * margin,
        ))
    }

    /// Iterate the absolute coordinates of every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |cy| (x..x + width).map(move |cx| (cx, cy)))
    }
}
