//! Text rendering


use crate::consts::{S_CORRIDOR, S_ROOM, S_WALL};

use super::cell::CellType;
use super::grid::Grid;

/// Glyphs used to draw each kind of cell
///
/// Corridors look like room floor by default; give them their own glyph
/// with [`RenderStyle::distinct_corridors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub wall: char,
    pub room: char,
    pub corridor: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            wall: S_WALL,
            room: S_ROOM,
            corridor: S_CORRIDOR,
        }
    }
}

impl RenderStyle {
    /// Default style with corridors drawn as `glyph`
    pub fn distinct_corridors(glyph: char) -> Self {
        Self {
            corridor: glyph,
            ..Self::default()
        }
    }

    /// Get the display character for a cell
    pub const fn glyph(&self, cell: CellType) -> char {
        match cell {
            CellType::Wall => self.wall,
            CellType::Room => self.room,
            CellType::Corridor | CellType::Floor => self.corridor,
        }
    }

    /// Draw a grid: `height` lines of `width` glyphs, each ending in `\n`
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.width() * self.wall.len_utf8() + 1) * grid.height());
        for row in grid.rows() {
            out.extend(row.iter().map(|&cell| self.glyph(cell)));
            out.push('\n');
        }
        out
    }
}
