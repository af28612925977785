//! Cell storage and region views
//!
//! The grid owns one row-major buffer. A [`Region`] or [`RegionMut`] is a
//! rectangular window onto that buffer, never a copy: a cell written
//! through a region is immediately visible through the grid and through
//! every other region that covers it.

use std::ops::Index;

use super::cell::CellType;
use super::rect::Rect;

/// 4-connected neighbour offsets
const DIRS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// The dungeon map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a grid filled with walls
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellType::Wall; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The rectangle covering the whole grid
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get the cell at an absolute position
    pub fn get(&self, x: usize, y: usize) -> Option<CellType> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellType]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Apply a state transition to one cell.
    ///
    /// Transitions the state machine forbids are ignored. Returns true if
    /// the cell changed.
    pub(crate) fn transition(&mut self, x: usize, y: usize, next: CellType) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.index_of(x, y);
        if self.cells[idx].can_become(next) {
            self.cells[idx] = next;
            true
        } else {
            false
        }
    }

    /// Read-only view of a rectangle, clipped to the grid
    pub fn region(&self, rect: Rect) -> Region<'_> {
        let rect = rect.intersection(&self.bounds());
        Region { grid: self, rect }
    }

    /// Writable view of a rectangle, clipped to the grid
    pub fn region_mut(&mut self, rect: Rect) -> RegionMut<'_> {
        let rect = rect.intersection(&self.bounds());
        RegionMut { grid: self, rect }
    }

    /// Count cells of one type
    pub fn count(&self, typ: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == typ).count()
    }

    /// Count walkable cells
    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_floor()).count()
    }

    /// Number of 4-connected components of walkable cells
    pub fn floor_components(&self) -> usize {
        let mut seen = vec![false; self.cells.len()];
        let mut stack = Vec::new();
        let mut components = 0;

        for start in 0..self.cells.len() {
            if seen[start] || !self.cells[start].is_floor() {
                continue;
            }
            components += 1;
            seen[start] = true;
            stack.push(start);

            while let Some(idx) = stack.pop() {
                let x = idx % self.width;
                let y = idx / self.width;
                for (dx, dy) in DIRS {
                    let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                    else {
                        continue;
                    };
                    if nx >= self.width || ny >= self.height {
                        continue;
                    }
                    let nidx = self.index_of(nx, ny);
                    if !seen[nidx] && self.cells[nidx].is_floor() {
                        seen[nidx] = true;
                        stack.push(nidx);
                    }
                }
            }
        }

        components
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = CellType;

    fn index(&self, (x, y): (usize, usize)) -> &CellType {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[self.index_of(x, y)]
    }
}

/// Read-only window onto a grid
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    grid: &'a Grid,
    rect: Rect,
}

impl<'a> Region<'a> {
    /// Absolute bounds of this region
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Iterate every cell as `(absolute x, absolute y, state)`, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellType)> + use<'a> {
        let grid = self.grid;
        self.rect
            .cells()
            .map(move |(x, y)| (x, y, grid.cells[grid.index_of(x, y)]))
    }
}

/// Writable window onto a grid
///
/// Writes go straight to the grid's buffer and follow the cell state
/// machine.
#[derive(Debug)]
pub struct RegionMut<'a> {
    grid: &'a mut Grid,
    rect: Rect,
}

impl<'a> RegionMut<'a> {
    /// Absolute bounds of this region
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Narrow to a sub-window. `local` is relative to this region's origin
    /// and is clipped to it.
    pub fn sub_region(&mut self, local: Rect) -> RegionMut<'_> {
        let absolute = Rect::new(
            self.rect.x + local.x,
            self.rect.y + local.y,
            local.width,
            local.height,
        );
        RegionMut {
            rect: absolute.intersection(&self.rect),
            grid: &mut *self.grid,
        }
    }

    /// Apply a state transition at a local position. Returns true if the
    /// cell changed.
    pub fn transition(&mut self, x: usize, y: usize, next: CellType) -> bool {
        if x >= self.rect.width || y >= self.rect.height {
            return false;
        }
        self.grid.transition(self.rect.x + x, self.rect.y + y, next)
    }

    /// Apply a state transition to every cell of the window. Returns the
    /// number of cells that changed.
    pub fn fill(&mut self, next: CellType) -> usize {
        let rect = self.rect;
        rect.cells()
            .filter(|&(x, y)| self.grid.transition(x, y, next))
            .count()
    }
}
